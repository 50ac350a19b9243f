pub use super::clan::Entity as Clan;
pub use super::clan_chat_message::Entity as ClanChatMessage;
pub use super::clan_member::Entity as ClanMember;
pub use super::clan_war::Entity as ClanWar;
pub use super::war_sequence::Entity as WarSequence;
