use crate::models::invocation::InvocationResponse;

pub fn handle() -> InvocationResponse {
    InvocationResponse::preflight()
}
