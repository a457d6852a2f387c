use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum QuestionCategory {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Question {
    Table,
    Id,
    CategoryId,
    Text,
    Difficulty,
}

#[derive(DeriveIden)]
enum Answer {
    Table,
    Id,
    QuestionId,
    Text,
    IsCorrect,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(QuestionCategory::Table)
                .col(ColumnDef::new(QuestionCategory::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(QuestionCategory::Name).string().not_null())
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(Question::Table)
                .col(ColumnDef::new(Question::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Question::CategoryId).uuid().not_null())
                .col(ColumnDef::new(Question::Text).text().not_null())
                .col(ColumnDef::new(Question::Difficulty).string_len(20).not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_question_category")
                        .from(Question::Table, Question::CategoryId)
                        .to(QuestionCategory::Table, QuestionCategory::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_question_category")
                .table(Question::Table)
                .col(Question::CategoryId)
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(Answer::Table)
                .col(ColumnDef::new(Answer::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Answer::QuestionId).uuid().not_null())
                .col(ColumnDef::new(Answer::Text).string().not_null())
                .col(ColumnDef::new(Answer::IsCorrect).boolean().not_null().default(false))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_answer_question")
                        .from(Answer::Table, Answer::QuestionId)
                        .to(Question::Table, Question::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_answer_question")
                .table(Answer::Table)
                .col(Answer::QuestionId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Answer::Table).if_exists().to_owned())
            .await?;
        m.drop_table(Table::drop().table(Question::Table).if_exists().to_owned())
            .await?;
        m.drop_table(Table::drop().table(QuestionCategory::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
