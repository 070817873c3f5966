//! Infrastructure Layer
//!
//! Database implementations and the in-process session store.

pub mod memory;
pub mod postgres;

pub use memory::{MemorySessionStore, MemoryUserRepository};
pub use postgres::PgUserRepository;
