use crate::{
    data::chat::ClanChatRepository,
    model::id::{ClanId, UserId},
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_clan;
mod create;
mod get_recent;

fn at(minute: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap()
        + Duration::minutes(minute)
}
