use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Section {
    Table,
    Id,
    Title,
    Description,
    Owner,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Content {
    Table,
    Id,
    SectionId,
    Title,
    Text,
    File,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Section::Table)
                .col(ColumnDef::new(Section::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Section::Title).string().not_null())
                .col(ColumnDef::new(Section::Description).text().not_null())
                .col(ColumnDef::new(Section::Owner).uuid().not_null())
                .col(ColumnDef::new(Section::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_section_owner")
                        .from(Section::Table, Section::Owner)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_section_owner")
                .table(Section::Table)
                .col(Section::Owner)
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(Content::Table)
                .col(ColumnDef::new(Content::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Content::SectionId).uuid().not_null())
                .col(ColumnDef::new(Content::Title).string().not_null())
                .col(ColumnDef::new(Content::Text).text().not_null())
                .col(ColumnDef::new(Content::File).string().null())
                .col(ColumnDef::new(Content::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_content_section")
                        .from(Content::Table, Content::SectionId)
                        .to(Section::Table, Section::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_content_section")
                .table(Content::Table)
                .col(Content::SectionId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Content::Table).if_exists().to_owned())
            .await?;
        m.drop_table(Table::drop().table(Section::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
