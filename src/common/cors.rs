use std::collections::BTreeMap;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";
pub const MAX_AGE_SECS: u32 = 86400;

pub const JSON_CONTENT_TYPE: &str = "application/json";

pub type Headers = BTreeMap<String, String>;

/// Headers advertised in answer to a CORS preflight.
pub fn preflight_headers() -> Headers {
    Headers::from([
        ("Access-Control-Allow-Origin".to_owned(), ALLOW_ORIGIN.to_owned()),
        ("Access-Control-Allow-Methods".to_owned(), ALLOW_METHODS.to_owned()),
        ("Access-Control-Allow-Headers".to_owned(), ALLOW_HEADERS.to_owned()),
        ("Access-Control-Max-Age".to_owned(), MAX_AGE_SECS.to_string()),
    ])
}

/// Headers carried by every JSON response.
pub fn json_headers() -> Headers {
    Headers::from([
        ("Content-Type".to_owned(), JSON_CONTENT_TYPE.to_owned()),
        ("Access-Control-Allow-Origin".to_owned(), ALLOW_ORIGIN.to_owned()),
    ])
}
