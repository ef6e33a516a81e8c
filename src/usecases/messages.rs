use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::common::store::StoreConnection;
use crate::models::messages::{CreateMessageArgs, CreatedMessage, Message};
use crate::usecases::connections;
use tracing::info;

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<Message>> {
    let mut conn = connections::open(ctx).await?;
    let result = conn.fetch_messages().await;
    connections::release(conn).await;

    let messages = result?;
    Ok(messages.into_iter().map(Message::from).collect())
}

/// Validates and persists a message. Invalid input is rejected before the
/// store is touched.
pub async fn create<C: Context>(
    ctx: &C,
    args: CreateMessageArgs,
) -> ServiceResult<CreatedMessage> {
    let message = args.validate()?;

    let mut conn = connections::open(ctx).await?;
    let result = conn.insert_message(&message).await;
    connections::release(conn).await;

    let inserted = result?;
    info!(
        message_id = inserted.id,
        user_id = %message.user_id,
        is_creator = message.is_creator,
        "Message created"
    );
    Ok(CreatedMessage::from(inserted))
}
