use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub games_played: i32,
    pub games_won: i32,
    pub current_streak: i32,
    pub max_streak: i32,
    /// JSON object of guess number to win count
    #[sea_orm(column_type = "Text")]
    pub guess_distribution: String,
    pub last_played_date: Option<String>,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
