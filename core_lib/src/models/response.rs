//! Response envelope

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Bare `{"success": true}`.
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_serializes_to_success_only() {
        let value = serde_json::to_value(ApiResponse::ok()).unwrap();
        assert_eq!(value, json!({ "success": true }));
    }

    #[test]
    fn test_success_with_data() {
        let value = serde_json::to_value(ApiResponse::success(json!({ "status": "healthy" }))).unwrap();
        assert_eq!(value, json!({ "success": true, "data": { "status": "healthy" } }));
    }
}
