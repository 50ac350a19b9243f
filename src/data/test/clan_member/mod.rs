use crate::{
    data::clan_member::ClanMemberRepository,
    model::id::{ClanId, UserId},
    util::time::now_local,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod delete_by_clan;
mod remove;
