use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::models::invocation::InvocationResponse;
use crate::models::messages::MessagesResponse;
use crate::usecases::messages;
use axum::http::StatusCode;

pub async fn handle<C: Context>(ctx: &C) -> ServiceResult<InvocationResponse> {
    let messages = messages::fetch_all(ctx).await?;
    Ok(InvocationResponse::json(
        StatusCode::OK,
        &MessagesResponse { messages },
    ))
}
