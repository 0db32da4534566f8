//! Breach check model

use serde::Deserialize;

pub use footprint_core::logic::service::BreachResult;

#[derive(Debug, Deserialize)]
pub struct BreachCheckBody {
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breach_check_body() {
        let body: BreachCheckBody = serde_json::from_str(r#"{"email":"me@example.com"}"#).unwrap();
        assert_eq!(body.email.as_deref(), Some("me@example.com"));

        let body: BreachCheckBody = serde_json::from_str("{}").unwrap();
        assert!(body.email.is_none());
    }

    #[test]
    fn test_breach_result_wire_shape() {
        let result: BreachResult =
            serde_json::from_str(r#"{"email":"me@example.com","breaches":[]}"#).unwrap();
        assert_eq!(result.email, "me@example.com");
        assert!(result.breaches.is_empty());
    }
}
