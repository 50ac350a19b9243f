use crate::{data::war::WarRepository, model::id::ClanId, util::time::now_local};
use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_by_clan;
mod last_war_id;
mod upsert;
