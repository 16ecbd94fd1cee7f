mod local_store;
mod memory_store;
mod store_factory;

pub use local_store::LocalResultStore;
pub use memory_store::InMemoryResultStore;
pub use store_factory::ResultStoreFactory;
