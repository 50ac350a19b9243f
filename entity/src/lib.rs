//! SeaORM entities for the clan and clan war tables.

pub mod prelude;

pub mod clan;
pub mod clan_chat_message;
pub mod clan_member;
pub mod clan_war;
pub mod war_sequence;
