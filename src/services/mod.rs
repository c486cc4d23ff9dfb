// Service exports
pub mod cache;
pub mod memory;
pub mod notifier;
pub mod postgres;
pub mod store;

pub use cache::ProfileCache;
pub use memory::MemoryStore;
pub use notifier::{LogNotifier, MatchNotifier, NotifyError, WebhookNotifier};
pub use postgres::PgProfileStore;
pub use store::{ProfileStore, StoreError};
