use crate::common::store::Store;

pub trait Context: Sync + Send {
    type Store: Store;

    fn store(&self) -> &Self::Store;
    fn store_connection_string(&self) -> Option<&str>;
}
