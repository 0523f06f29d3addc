use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const UNIQUE_USER_CHARACTER: &str = "idx_favorite_characters_user_id_character_id";
const IDX_CHARACTER: &str = "idx_favorite_characters_character_id";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoriteCharacters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FavoriteCharacters::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(FavoriteCharacters::CharacterId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FavoriteCharacters::Table, FavoriteCharacters::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FavoriteCharacters::Table, FavoriteCharacters::CharacterId)
                            .to(Characters::Table, Characters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(FavoriteCharacters::Table)
                    .col(FavoriteCharacters::UserId)
                    .col(FavoriteCharacters::CharacterId)
                    .unique()
                    .name(UNIQUE_USER_CHARACTER)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(FavoriteCharacters::Table)
                    .col(FavoriteCharacters::CharacterId)
                    .name(IDX_CHARACTER)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteCharacters::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FavoriteCharacters {
    Table,
    Id,
    UserId,
    CharacterId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Characters {
    Table,
    Id,
}
