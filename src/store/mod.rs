pub mod repository;
pub mod service;

mod errors;

pub use errors::StoreError;
pub use repository::{
    InMemoryStateRepository, JsonFileStateRepository, PersistedState, StateRepository,
};
pub use service::{GameStore, GameStoreBuilder};
