//! Record resolution with a remote tier and a bundled fallback
//!
//! The remote tier is cached per key for a fixed freshness window. When it is
//! unavailable or unconfigured, the bundled dataset is served instead.

// Sub-modules
pub mod cache;
pub mod errors;
pub mod fallback;
pub mod record;
pub mod remote;
pub mod resolver;

// Re-exports for public API
pub use cache::{CacheEntry, CacheStatus, EntryState, RecordCache};
pub use errors::{FallbackError, RemoteQueryError, RemoteResult};
pub use fallback::{FallbackDataset, load_records};
pub use record::DataRecord;
pub use remote::{RemoteFuture, RemoteStore, SupabaseStore};
pub use resolver::{DataSourceResolver, RecordSource, Resolved};
