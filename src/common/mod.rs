pub mod context;
pub mod cors;
pub mod env;
pub mod error;
pub mod init;
pub mod state;
pub mod store;
