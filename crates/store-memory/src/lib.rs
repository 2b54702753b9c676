//! In-memory store implementation for Cambist.
//!
//! This crate implements the store traits defined in `cambist-core`
//! with process-local, lock-guarded maps. It is the store of choice for
//! tests and for embedding the engine without a database; a persistent
//! store crate would implement the same traits against real storage.
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! store-memory (this crate)
//!       │
//!       ▼
//! RwLock-guarded maps
//! ```

pub mod balances;
pub mod counter;

pub use balances::MemoryBalanceStore;
pub use counter::MemoryCounterStore;

// Re-export from cambist-core for convenience
pub use cambist_core::errors::{Error, PersistenceError, Result};
