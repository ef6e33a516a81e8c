use crate::entities::messages::{InsertedMessage, Message};
use crate::models::messages::NewMessage;
use sqlx::{Connection, PgConnection};
use tracing::warn;

const TABLE_NAME: &str = "messages";
const READ_FIELDS: &str =
    "id::BIGINT AS id, user_id, username, message_text, is_creator, created_at";

pub async fn fetch_all(conn: &mut PgConnection) -> sqlx::Result<Vec<Message>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY created_at ASC"
    );
    sqlx::query_as(QUERY).fetch_all(conn).await
}

/// Inserts `message` in its own transaction. On failure the transaction is rolled
/// back before the error is returned.
pub async fn insert(
    conn: &mut PgConnection,
    message: &NewMessage,
) -> sqlx::Result<InsertedMessage> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (user_id, username, message_text, is_creator, created_at) ",
        "VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP) ",
        "RETURNING id::BIGINT AS id, created_at"
    );
    let mut tx = conn.begin().await?;
    let inserted = sqlx::query_as::<_, InsertedMessage>(QUERY)
        .bind(&message.user_id)
        .bind(&message.username)
        .bind(&message.text)
        .bind(message.is_creator)
        .fetch_one(&mut *tx)
        .await;

    match inserted {
        Ok(inserted) => {
            tx.commit().await?;
            Ok(inserted)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Failed to roll back message insert: {rollback_err}");
            }
            Err(e)
        }
    }
}
