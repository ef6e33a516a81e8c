use chrono::NaiveDateTime;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub message_text: Option<String>,
    pub is_creator: Option<bool>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InsertedMessage {
    pub id: i64,
    pub created_at: NaiveDateTime,
}
