//! Device model - User-Agent parsing and client address

use std::net::SocketAddr;

use axum::http::HeaderMap;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

pub const UNKNOWN_BROWSER: &str = "Unknown Browser";
pub const UNKNOWN_OS: &str = "Unknown OS";

/// Shown alongside every device scan
pub const MAC_ADDRESS_NOTE: &str =
    "MAC address cannot be detected from web browser for security reasons";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAgentInfo {
    pub browser: &'static str,
    pub os: &'static str,
    pub device_type: &'static str,
}

impl UserAgentInfo {
    pub fn device_name(&self) -> String {
        format!("{} on {}", self.browser, self.os)
    }
}

/// `device_info` is an open object: the advanced payload is merged over it
#[derive(Debug, Serialize)]
pub struct DeviceScanResponse {
    pub scan_id: Uuid,
    pub device_info: Map<String, Value>,
}

/// Classify a User-Agent header by substring, first match wins.
/// Edge ("Edg/") is checked before Chrome since its UA also says Chrome.
pub fn parse_user_agent(user_agent: &str) -> UserAgentInfo {
    let ua = user_agent.to_lowercase();

    let browser = if ua.contains("edg") {
        "Microsoft Edge"
    } else if ua.contains("chrome") {
        "Google Chrome"
    } else if ua.contains("firefox") {
        "Mozilla Firefox"
    } else if ua.contains("safari") {
        "Safari"
    } else if ua.contains("opera") || ua.contains("opr") {
        "Opera"
    } else {
        UNKNOWN_BROWSER
    };

    let os = if ua.contains("windows") {
        if ua.contains("windows nt 10") {
            "Windows 10/11"
        } else if ua.contains("windows nt 6") {
            "Windows 7/8"
        } else {
            "Windows"
        }
    } else if (ua.contains("mac os x") || ua.contains("macintosh")) && !is_ios(&ua) {
        "macOS"
    } else if ua.contains("linux") && !ua.contains("android") {
        "Linux"
    } else if ua.contains("android") {
        "Android"
    } else if is_ios(&ua) {
        "iOS"
    } else {
        UNKNOWN_OS
    };

    let device_type = if ua.contains("mobile") || ua.contains("android") || ua.contains("iphone") {
        "Mobile"
    } else if ua.contains("tablet") || ua.contains("ipad") {
        "Tablet"
    } else {
        "Desktop"
    };

    UserAgentInfo { browser, os, device_type }
}

/// iOS UAs also say "like Mac OS X"
fn is_ios(ua: &str) -> bool {
    ua.contains("iphone") || ua.contains("ipad")
}

/// First `X-Forwarded-For` entry, else the socket peer
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    headers
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
}

/// "203.0.113.7" -> "203.0.113.x" (for logs)
pub fn mask_ip(ip: &str) -> String {
    if let Some((prefix, _)) = ip.rsplit_once('.') {
        format!("{}.x", prefix)
    } else if let Some((prefix, _)) = ip.rsplit_once(':') {
        format!("{}:x", prefix)
    } else {
        "x".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36";
    const EDGE_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36 Edg/130.0.0.0";
    const FIREFOX_LINUX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:131.0) Gecko/20100101 Firefox/131.0";
    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const CHROME_ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Mobile Safari/537.36";

    #[test]
    fn test_parse_desktop_browsers() {
        let chrome = parse_user_agent(CHROME_WIN);
        assert_eq!(chrome.browser, "Google Chrome");
        assert_eq!(chrome.os, "Windows 10/11");
        assert_eq!(chrome.device_type, "Desktop");
        assert_eq!(chrome.device_name(), "Google Chrome on Windows 10/11");

        assert_eq!(parse_user_agent(EDGE_WIN).browser, "Microsoft Edge");

        let firefox = parse_user_agent(FIREFOX_LINUX);
        assert_eq!((firefox.browser, firefox.os), ("Mozilla Firefox", "Linux"));
    }

    #[test]
    fn test_parse_mobile() {
        let safari = parse_user_agent(SAFARI_IPHONE);
        assert_eq!(safari.browser, "Safari");
        assert_eq!(safari.os, "iOS");
        assert_eq!(safari.device_type, "Mobile");

        let android = parse_user_agent(CHROME_ANDROID);
        assert_eq!(android.os, "Android");
        assert_eq!(android.device_type, "Mobile");
    }

    #[test]
    fn test_parse_unknown() {
        let info = parse_user_agent("curl/8.4.0");
        assert_eq!(info.browser, UNKNOWN_BROWSER);
        assert_eq!(info.os, UNKNOWN_OS);
        assert_eq!(info.device_name(), "Unknown Browser on Unknown OS");
    }

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        let peer: SocketAddr = "10.0.0.2:51234".parse().unwrap();
        assert_eq!(client_ip(&headers, Some(peer)).as_deref(), Some("10.0.0.2"));

        headers.insert("X-Forwarded-For", "198.51.100.4, 10.0.0.1".parse().unwrap());
        assert_eq!(client_ip(&headers, Some(peer)).as_deref(), Some("198.51.100.4"));
        assert_eq!(client_ip(&HeaderMap::new(), None), None);
    }

    #[test]
    fn test_mask_ip() {
        assert_eq!(mask_ip("203.0.113.7"), "203.0.113.x");
        assert_eq!(mask_ip("2001:db8::1"), "2001:db8::x");
        assert_eq!(mask_ip("unknown"), "x");
    }
}
