use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DailyPuzzles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DailyPuzzles::Date)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DailyPuzzles::Id).string().not_null())
                    .col(ColumnDef::new(DailyPuzzles::GolferId).string().not_null())
                    .col(ColumnDef::new(DailyPuzzles::GolferName).string().not_null())
                    .col(
                        ColumnDef::new(DailyPuzzles::TotalPlays)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DailyPuzzles::TotalWins)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DailyPuzzles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Used-golfer lookups when choosing a new puzzle
        manager
            .create_index(
                Index::create()
                    .name("idx_daily_puzzles_id")
                    .table(DailyPuzzles::Table)
                    .col(DailyPuzzles::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserStats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserStats::UserId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserStats::GamesPlayed)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserStats::GamesWon)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserStats::CurrentStreak)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserStats::MaxStreak)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(UserStats::GuessDistribution).text().not_null())
                    .col(ColumnDef::new(UserStats::LastPlayedDate).string().null())
                    .col(
                        ColumnDef::new(UserStats::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserGames::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserGames::UserId).string().not_null())
                    .col(ColumnDef::new(UserGames::Date).string().not_null())
                    .col(ColumnDef::new(UserGames::GolferId).string().not_null())
                    .col(ColumnDef::new(UserGames::GuessedGolferIds).text().not_null())
                    .col(ColumnDef::new(UserGames::Won).boolean().not_null())
                    .col(ColumnDef::new(UserGames::Guesses).integer().not_null())
                    .col(
                        ColumnDef::new(UserGames::CompletedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserGames::UserId)
                            .col(UserGames::Date),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserGames::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserStats::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DailyPuzzles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DailyPuzzles {
    Table,
    Date,
    Id,
    GolferId,
    GolferName,
    TotalPlays,
    TotalWins,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UserStats {
    Table,
    UserId,
    GamesPlayed,
    GamesWon,
    CurrentStreak,
    MaxStreak,
    GuessDistribution,
    LastPlayedDate,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserGames {
    Table,
    UserId,
    Date,
    GolferId,
    GuessedGolferIds,
    Won,
    Guesses,
    CompletedAt,
}
