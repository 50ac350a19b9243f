//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary.
//! Outbound models implement `Serialize` with the wire shapes the request layer
//! emits (decimal-string ids, `YYYY-MM-DD HH:MM:SS` timestamps).

pub mod chat;
pub mod clan;
pub mod id;
pub mod war;
