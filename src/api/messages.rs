use crate::common::error::{AppError, ServiceResult};
use crate::common::state::AppState;
use crate::common::store::Store;
use crate::models::invocation::{Invocation, InvocationResponse};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method};
use std::collections::HashMap;

/// Controller for the message board route; every verb goes through the service.
pub async fn controller<S: Store + Clone + 'static>(
    State(state): State<AppState<S>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> InvocationResponse {
    match into_invocation(method, &headers, body) {
        Ok(invocation) => state.handle(invocation).await,
        Err(e) => InvocationResponse::from(e),
    }
}

fn into_invocation(method: Method, headers: &HeaderMap, body: Bytes) -> ServiceResult<Invocation> {
    let headers: HashMap<String, String> = headers
        .iter()
        .filter_map(|(name, value)| {
            let value = value.to_str().ok()?;
            Some((name.as_str().to_owned(), value.to_owned()))
        })
        .collect();
    let body = match body.is_empty() {
        true => None,
        false => Some(
            String::from_utf8(body.to_vec())
                .map_err(|e| AppError::DecodingRequestFailed(e.to_string()))?,
        ),
    };

    Ok(Invocation {
        http_method: Some(method.as_str().to_owned()),
        headers: Some(headers),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn empty_http_body_becomes_missing_body() {
        let invocation = into_invocation(Method::POST, &HeaderMap::new(), Bytes::new()).unwrap();
        assert_eq!(invocation.method(), "POST");
        assert_eq!(invocation.body, None);
    }

    #[test]
    fn headers_and_body_are_carried_over() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        let invocation = into_invocation(
            Method::POST,
            &headers,
            Bytes::from_static(br#"{"messageText":"hi"}"#),
        )
        .unwrap();
        assert_eq!(invocation.body.as_deref(), Some(r#"{"messageText":"hi"}"#));
        assert_eq!(
            invocation.headers.unwrap().get("content-type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn invalid_utf8_body_is_a_decoding_error() {
        let body = Bytes::from_static(b"{\"messageText\":\"caf\xe9\"}");
        match into_invocation(Method::POST, &HeaderMap::new(), body) {
            Err(AppError::DecodingRequestFailed(message)) => assert!(message.contains("utf-8")),
            other => panic!("expected a decoding error, got {other:?}"),
        }
    }
}
