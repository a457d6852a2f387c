use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::quiz::{
    CheckAnswerRes, RAnswerCreate, RAnswerUpdate, RCategoryCreate, RCategoryUpdate,
    RQuestionCreate, RQuestionUpdate,
};
use crate::utils::token::new_id;
use entity::answer::{ActiveModel as AnswerActive, Entity as Answer, Model as AnswerModel};
use entity::question::{ActiveModel as QuestionActive, Entity as Question, Model as QuestionModel};
use entity::question_category::{
    ActiveModel as CategoryActive, Entity as Category, Model as CategoryModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

impl PostgresService {
    // -- categories ---------------------------------------------------------

    pub async fn create_category(&self, payload: RCategoryCreate) -> Result<CategoryModel, AppError> {
        if payload.name.trim().is_empty() {
            return Err(AppError::Validation("name: must not be empty".into()));
        }
        Ok(CategoryActive {
            id: Set(new_id()),
            name: Set(payload.name),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_category(&self, id: Uuid) -> Result<CategoryModel, AppError> {
        Ok(Category::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Category not found".into()))?)
    }

    pub async fn list_categories_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<CategoryModel>, u64), AppError> {
        let finder = Category::find().order_by_asc(entity::question_category::Column::Id);
        let total = finder.clone().count(&self.db).await?;
        let items = finder.paginate(&self.db, per_page).fetch_page(page).await?;
        Ok((items, total))
    }

    pub async fn update_category(
        &self,
        id: Uuid,
        patch: RCategoryUpdate,
    ) -> Result<CategoryModel, AppError> {
        let current = self.get_category(id).await?;
        let mut am: CategoryActive = current.into();
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation("name: must not be empty".into()));
            }
            am.name = Set(name);
        }
        Ok(am.update(&self.db).await?)
    }

    /// Questions and, transitively, their answers go with it via FK cascade.
    pub async fn delete_category(&self, id: Uuid) -> Result<(), AppError> {
        let res = Category::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    // -- questions ----------------------------------------------------------

    pub async fn create_question(&self, payload: RQuestionCreate) -> Result<QuestionModel, AppError> {
        if payload.text.trim().is_empty() {
            return Err(AppError::Validation("text: must not be empty".into()));
        }
        // resolve the category up front so a dangling id is a client error,
        // not an FK violation bubbling up as a 500
        if Category::find_by_id(payload.category).one(&self.db).await?.is_none() {
            return Err(AppError::InvalidReference("category: no such question category".into()));
        }
        Ok(QuestionActive {
            id: Set(new_id()),
            category_id: Set(payload.category),
            text: Set(payload.text),
            difficulty: Set(payload.difficulty),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_question(&self, id: Uuid) -> Result<QuestionModel, AppError> {
        Ok(Question::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Question not found".into()))?)
    }

    pub async fn list_questions_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<QuestionModel>, u64), AppError> {
        let finder = Question::find().order_by_asc(entity::question::Column::Id);
        let total = finder.clone().count(&self.db).await?;
        let items = finder.paginate(&self.db, per_page).fetch_page(page).await?;
        Ok((items, total))
    }

    pub async fn update_question(
        &self,
        id: Uuid,
        patch: RQuestionUpdate,
    ) -> Result<QuestionModel, AppError> {
        let current = self.get_question(id).await?;
        let mut am: QuestionActive = current.into();
        if let Some(text) = patch.text {
            if text.trim().is_empty() {
                return Err(AppError::Validation("text: must not be empty".into()));
            }
            am.text = Set(text);
        }
        if let Some(difficulty) = patch.difficulty {
            am.difficulty = Set(difficulty);
        }
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_question(&self, id: Uuid) -> Result<(), AppError> {
        let res = Question::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    // -- answers ------------------------------------------------------------

    pub async fn create_answer(&self, payload: RAnswerCreate) -> Result<AnswerModel, AppError> {
        if payload.text.trim().is_empty() {
            return Err(AppError::Validation("text: must not be empty".into()));
        }
        if Question::find_by_id(payload.question).one(&self.db).await?.is_none() {
            return Err(AppError::InvalidReference("question: no such question".into()));
        }
        Ok(AnswerActive {
            id: Set(new_id()),
            question_id: Set(payload.question),
            text: Set(payload.text),
            is_correct: Set(payload.is_correct),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_answer(&self, id: Uuid) -> Result<AnswerModel, AppError> {
        Ok(Answer::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Answer not found".into()))?)
    }

    pub async fn list_answers_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<AnswerModel>, u64), AppError> {
        let finder = Answer::find().order_by_asc(entity::answer::Column::Id);
        let total = finder.clone().count(&self.db).await?;
        let items = finder.paginate(&self.db, per_page).fetch_page(page).await?;
        Ok((items, total))
    }

    /// Partial merge; is_correct is immutable after creation.
    pub async fn update_answer(
        &self,
        id: Uuid,
        patch: RAnswerUpdate,
    ) -> Result<AnswerModel, AppError> {
        let current = self.get_answer(id).await?;
        let mut am: AnswerActive = current.into();
        if let Some(text) = patch.text {
            if text.trim().is_empty() {
                return Err(AppError::Validation("text: must not be empty".into()));
            }
            am.text = Set(text);
        }
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_answer(&self, id: Uuid) -> Result<(), AppError> {
        let res = Answer::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    // -- evaluation ---------------------------------------------------------

    /// Pure lookup, no scoring heuristics: the stored flag is the verdict.
    /// A missing question is NotFound; an answer that exists but belongs to
    /// a different question is an invalid reference, not a not-found.
    pub async fn check_answer(
        &self,
        question_id: Uuid,
        answer_id: Uuid,
    ) -> Result<CheckAnswerRes, AppError> {
        let question = Question::find_by_id(question_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let answer = Answer::find_by_id(answer_id)
            .filter(entity::answer::Column::QuestionId.eq(question.id))
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                AppError::InvalidReference("answer_id: answer does not belong to the question".into())
            })?;

        Ok(CheckAnswerRes {
            question_text: question.text,
            is_correct: answer.is_correct,
        })
    }
}
