use crate::{
    data::clan::ClanRepository,
    model::id::{ClanId, UserId},
    util::time::now_local,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all_with_member_counts;
mod max_id;
