//! API Gateway proxy event shapes used by the Lambda host.

use crate::domain::model::{RelayRequest, RelayResponse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl From<ProxyRequest> for RelayRequest {
    fn from(value: ProxyRequest) -> Self {
        RelayRequest::new(value.http_method, value.body)
    }
}

impl From<RelayResponse> for ProxyResponse {
    fn from(value: RelayResponse) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code: value.status,
            headers,
            body: value.body.to_string(),
        }
    }
}
