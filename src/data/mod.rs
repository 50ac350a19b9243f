//! Storage layer.
//!
//! Database repositories handle CRUD for clans, rosters, chat, and the war
//! summary. They are generic over `ConnectionTrait` so services can run several
//! of them inside one transaction. `WarHistoryStore` owns the template and
//! history directories on disk.

pub mod chat;
pub mod clan;
pub mod clan_member;
pub mod war;
pub mod war_history;

#[cfg(test)]
mod test;
