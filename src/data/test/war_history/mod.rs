use crate::{
    data::war_history::WarHistoryStore,
    error::{war::WarError, AppError},
    model::war::{MapId, MapTally, RetentionPolicy, WarMapRecord},
};
use serde_json::json;
use test_utils::fixture::war_template::{write_template, write_templates, STANDARD_CNT};

mod publish;
mod read_overview;
mod records;
mod retire;
mod stage_template;
