pub mod connections;
pub mod messages;
