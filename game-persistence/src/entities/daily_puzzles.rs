use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "daily_puzzles")]
pub struct Model {
    /// `YYYY-MM-DD`
    #[sea_orm(primary_key, auto_increment = false)]
    pub date: String,
    pub id: String,
    pub golfer_id: String,
    pub golfer_name: String,
    pub total_plays: i64,
    pub total_wins: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
