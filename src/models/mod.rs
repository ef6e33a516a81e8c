pub mod invocation;
pub mod messages;
