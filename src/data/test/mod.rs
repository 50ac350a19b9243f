mod chat;
mod clan;
mod clan_member;
mod war;
mod war_history;
