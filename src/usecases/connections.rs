use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult};
use crate::common::store::{Store, StoreConnection};
use tracing::warn;

pub type ContextConnection<C> = <<C as Context>::Store as Store>::Connection;

/// Opens the connection an invocation works on. Every connection returned here
/// must be handed back to [`release`] on all paths.
pub async fn open<C: Context>(ctx: &C) -> ServiceResult<ContextConnection<C>> {
    let Some(connection_string) = ctx.store_connection_string() else {
        return Err(AppError::DatabaseNotConfigured);
    };
    let conn = ctx.store().connect(connection_string).await?;
    Ok(conn)
}

/// Closes the connection. A failed close does not change the invocation's outcome.
pub async fn release<T: StoreConnection>(conn: T) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close store connection: {e}");
    }
}
