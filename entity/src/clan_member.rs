use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clan_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub clan_id: i32,
    pub user_id: i64,
    pub joined_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clan::Entity",
        from = "Column::ClanId",
        to = "super::clan::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Clan,
}

impl Related<super::clan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
