pub mod create_message;
pub mod list_messages;
pub mod preflight;

use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult};
use crate::models::invocation::{Invocation, InvocationResponse};
use tracing::{debug, info};

pub async fn handle_request<C: Context>(ctx: &C, invocation: Invocation) -> InvocationResponse {
    let method = invocation.method().to_owned();
    debug!(%method, "Handling invocation");

    let response = match handle_invocation(ctx, invocation).await {
        Ok(response) => response,
        Err(e) => {
            debug!(%method, code = e.code(), "Invocation failed");
            InvocationResponse::from(e)
        }
    };
    info!(%method, status = response.status_code, "Invocation handled");
    response
}

async fn handle_invocation<C: Context>(
    ctx: &C,
    invocation: Invocation,
) -> ServiceResult<InvocationResponse> {
    if invocation.method() == "OPTIONS" {
        return Ok(preflight::handle());
    }

    match invocation.method() {
        "GET" => {
            require_store(ctx)?;
            list_messages::handle(ctx).await
        }
        "POST" => {
            require_store(ctx)?;
            create_message::handle(ctx, invocation.body.as_deref()).await
        }
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// Configuration errors win over request validation for the verbs that use the store.
fn require_store<C: Context>(ctx: &C) -> ServiceResult<()> {
    match ctx.store_connection_string() {
        Some(_) => Ok(()),
        None => Err(AppError::DatabaseNotConfigured),
    }
}
