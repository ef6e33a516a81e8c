use crate::common::error::{AppError, ServiceResult};
use crate::entities::messages::{InsertedMessage, Message as MessageEntity};
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_ID: &str = "anonymous";
pub const DEFAULT_USERNAME: &str = "Гость";

const CLOCK_FORMAT: &str = "%H:%M";
const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const ISO8601_MICROS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Body of a create request. Every field is optional on the wire;
/// defaults are applied once, in [`CreateMessageArgs::validate`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageArgs {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub message_text: Option<String>,
    pub is_creator: Option<bool>,
}

/// A message that passed validation and is ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub user_id: String,
    pub username: String,
    pub text: String,
    pub is_creator: bool,
}

impl CreateMessageArgs {
    /// A missing body is treated as an empty object.
    pub fn from_body(body: Option<&str>) -> ServiceResult<Self> {
        match body {
            None => Ok(Self::default()),
            Some(body) => serde_json::from_str(body)
                .map_err(|e| AppError::DecodingRequestFailed(e.to_string())),
        }
    }

    pub fn validate(self) -> ServiceResult<NewMessage> {
        let text = self.message_text.as_deref().unwrap_or_default().trim();
        if text.is_empty() {
            return Err(AppError::MessagesTextRequired);
        }

        Ok(NewMessage {
            text: text.to_owned(),
            user_id: self.user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_owned()),
            username: self.username.unwrap_or_else(|| DEFAULT_USERNAME.to_owned()),
            is_creator: self.is_creator.unwrap_or(false),
        })
    }
}

/// A message as returned by the list operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub text: String,
    pub is_creator: Option<bool>,
    pub timestamp: Option<String>,
    pub created_at: Option<String>,
}

impl From<MessageEntity> for Message {
    fn from(value: MessageEntity) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            username: value.username,
            text: value.message_text.unwrap_or_default(),
            is_creator: value.is_creator,
            timestamp: value.created_at.as_ref().map(format_clock),
            created_at: value.created_at.as_ref().map(format_iso8601),
        }
    }
}

pub struct CreatedMessage {
    pub message_id: i64,
    pub timestamp: String,
}

impl From<InsertedMessage> for CreatedMessage {
    fn from(value: InsertedMessage) -> Self {
        Self {
            message_id: value.id,
            timestamp: format_clock(&value.created_at),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageResponse {
    pub success: bool,
    pub message_id: i64,
    pub timestamp: String,
}

impl From<CreatedMessage> for CreateMessageResponse {
    fn from(value: CreatedMessage) -> Self {
        Self {
            success: true,
            message_id: value.message_id,
            timestamp: value.timestamp,
        }
    }
}

/// `HH:MM`, 24-hour clock, zero-padded.
pub fn format_clock(created_at: &NaiveDateTime) -> String {
    created_at.format(CLOCK_FORMAT).to_string()
}

/// ISO-8601 without an offset. Fractional seconds are only printed when present,
/// and then always with microsecond precision.
pub fn format_iso8601(created_at: &NaiveDateTime) -> String {
    let format = match created_at.nanosecond() {
        0 => ISO8601_FORMAT,
        _ => ISO8601_MICROS_FORMAT,
    };
    created_at.format(format).to_string()
}
