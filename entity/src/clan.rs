use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clan")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub owner_id: i64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::clan_chat_message::Entity")]
    ClanChatMessage,
    #[sea_orm(has_many = "super::clan_member::Entity")]
    ClanMember,
}

impl Related<super::clan_chat_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClanChatMessage.def()
    }
}

impl Related<super::clan_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClanMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
