use crate::common::cors::{self, Headers};
use crate::common::error::AppError;
use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{error, warn};

const DEFAULT_HTTP_METHOD: &str = "GET";

/// One request handed to the service by the invoking infrastructure.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invocation {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl Invocation {
    pub fn new(http_method: impl Into<String>, body: Option<String>) -> Self {
        Self {
            http_method: Some(http_method.into()),
            headers: None,
            body,
        }
    }

    pub fn method(&self) -> &str {
        self.http_method.as_deref().unwrap_or(DEFAULT_HTTP_METHOD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: Headers,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl InvocationResponse {
    pub fn preflight() -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            headers: cors::preflight_headers(),
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status_code: status.as_u16(),
                headers: cors::json_headers(),
                body,
                is_base64_encoded: false,
            },
            Err(e) => {
                error!("Failed to serialize response body: {e}");
                AppError::Store(e.to_string()).into()
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn json_body<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

impl From<AppError> for InvocationResponse {
    fn from(e: AppError) -> Self {
        let (status, body) = e.response_parts();
        Self::json(status, &body)
    }
}

impl IntoResponse for InvocationResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status(), self.body).into_response();
        let headers = response.headers_mut();
        headers.remove(header::CONTENT_TYPE);
        for (name, value) in self.headers {
            match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => warn!("Dropping a response header that is not valid HTTP"),
            }
        }
        response
    }
}
