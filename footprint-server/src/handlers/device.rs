//! Device scan handler

use std::net::SocketAddr;

use axum::{
    extract::ConnectInfo,
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    Json,
};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::models::{client_ip, mask_ip, parse_user_agent, DeviceScanResponse, MAC_ADDRESS_NOTE};

/// Identify the calling device. Nothing is stored.
pub async fn scan(
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    payload: Option<Json<Map<String, Value>>>,
) -> (StatusCode, Json<DeviceScanResponse>) {
    let ip_address = client_ip(&headers, peer.map(|ConnectInfo(addr)| addr));
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("Unknown");
    let ua = parse_user_agent(user_agent);

    let mut device_info = Map::new();
    device_info.insert(
        "ip_address".to_string(),
        ip_address.clone().map(Value::String).unwrap_or(Value::Null),
    );
    device_info.insert("browser_name".to_string(), ua.browser.into());
    device_info.insert("os_name".to_string(), ua.os.into());
    device_info.insert("device_type".to_string(), ua.device_type.into());
    device_info.insert("device_name".to_string(), ua.device_name().into());
    device_info.insert(
        "scan_time".to_string(),
        chrono::Utc::now().naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string().into(),
    );
    device_info.insert("note".to_string(), MAC_ADDRESS_NOTE.into());

    // Advanced signals override the basic fields on key collisions
    let advanced = payload.map(|Json(map)| map).unwrap_or_default();
    let advanced_count = advanced.len();
    device_info.extend(advanced);

    let scan_id = Uuid::new_v4();
    tracing::info!(
        "Device scan {}: {} from {} ({} advanced fields)",
        scan_id,
        ua.device_name(),
        ip_address.as_deref().map(mask_ip).unwrap_or_else(|| "unknown".to_string()),
        advanced_count
    );

    (StatusCode::CREATED, Json(DeviceScanResponse { scan_id, device_info }))
}
