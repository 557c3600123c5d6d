//! Durable client-side session: the logged-in user and the bearer token.
//!
//! Storage is a plain key/value trait so callers can swap the on-disk backend
//! for an in-memory one.

mod storage;
mod store;

pub use self::storage::{FileStorage, MemoryStorage, Storage};
pub use self::store::{SessionStore, TOKEN_KEY, USER_KEY};
pub(crate) use self::storage::write_atomic;
