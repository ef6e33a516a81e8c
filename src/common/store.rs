use crate::entities::messages::{InsertedMessage, Message};
use crate::models::messages::NewMessage;
use crate::repositories::messages;
use async_trait::async_trait;
use sqlx::{Connection, PgConnection};

/// Opens connections to the relational store holding the message board.
#[async_trait]
pub trait Store: Send + Sync {
    type Connection: StoreConnection;

    async fn connect(&self, connection_string: &str) -> sqlx::Result<Self::Connection>;
}

/// A single open store connection, owned by exactly one invocation.
#[async_trait]
pub trait StoreConnection: Send + Sized {
    /// All messages, oldest first.
    async fn fetch_messages(&mut self) -> sqlx::Result<Vec<Message>>;

    /// Persists `message` atomically; nothing is written when this fails.
    async fn insert_message(&mut self, message: &NewMessage) -> sqlx::Result<InsertedMessage>;

    async fn close(self) -> sqlx::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PgStore;

#[async_trait]
impl Store for PgStore {
    type Connection = PgConnection;

    async fn connect(&self, connection_string: &str) -> sqlx::Result<PgConnection> {
        PgConnection::connect(connection_string).await
    }
}

#[async_trait]
impl StoreConnection for PgConnection {
    async fn fetch_messages(&mut self) -> sqlx::Result<Vec<Message>> {
        messages::fetch_all(self).await
    }

    async fn insert_message(&mut self, message: &NewMessage) -> sqlx::Result<InsertedMessage> {
        messages::insert(self, message).await
    }

    async fn close(self) -> sqlx::Result<()> {
        Connection::close(self).await
    }
}
