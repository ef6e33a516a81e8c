use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::models::invocation::InvocationResponse;
use crate::models::messages::{CreateMessageArgs, CreateMessageResponse};
use crate::usecases::messages;
use axum::http::StatusCode;

pub async fn handle<C: Context>(ctx: &C, body: Option<&str>) -> ServiceResult<InvocationResponse> {
    let args = CreateMessageArgs::from_body(body)?;
    let created = messages::create(ctx, args).await?;
    Ok(InvocationResponse::json(
        StatusCode::CREATED,
        &CreateMessageResponse::from(created),
    ))
}
