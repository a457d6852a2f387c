use crate::auth::policy::ListScope;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::section::{RSectionCreate, RSectionUpdate};
use crate::utils::token::new_id;
use chrono::Utc;
use entity::section::{ActiveModel as SectionActive, Column, Entity as Section, Model as SectionModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

impl PostgresService {
    /// The creator becomes the owner; ownership never changes afterwards.
    pub async fn create_section(
        &self,
        owner: Uuid,
        payload: RSectionCreate,
    ) -> Result<SectionModel, AppError> {
        if payload.title.trim().is_empty() {
            return Err(AppError::Validation("title: must not be empty".into()));
        }
        Ok(SectionActive {
            id: Set(new_id()),
            title: Set(payload.title),
            description: Set(payload.description),
            owner: Set(owner),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn get_section(&self, id: Uuid) -> Result<SectionModel, AppError> {
        Ok(Section::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Section not found".into()))?)
    }

    /// Scoped listing: the caller's `ListScope` is applied as a query filter
    /// before pagination, so foreign sections are omitted, not rejected.
    pub async fn list_sections_paginated(
        &self,
        scope: ListScope,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<SectionModel>, u64), AppError> {
        let mut finder = Section::find().order_by_asc(Column::CreatedAt);
        match scope {
            ListScope::All => {}
            ListScope::OwnedBy(uid) | ListScope::SelfOnly(uid) => {
                finder = finder.filter(Column::Owner.eq(uid));
            }
            ListScope::Nothing => return Ok((Vec::new(), 0)),
        }
        let total = finder.clone().count(&self.db).await?;
        let items = finder.paginate(&self.db, per_page).fetch_page(page).await?;
        Ok((items, total))
    }

    /// Partial merge; the owner column is never touched.
    pub async fn update_section(
        &self,
        id: Uuid,
        patch: RSectionUpdate,
    ) -> Result<SectionModel, AppError> {
        let current = self.get_section(id).await?;
        let mut am: SectionActive = current.into();
        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(AppError::Validation("title: must not be empty".into()));
            }
            am.title = Set(title);
        }
        if let Some(description) = patch.description {
            am.description = Set(description);
        }
        Ok(am.update(&self.db).await?)
    }

    /// Contents go with the section via the FK cascade.
    pub async fn delete_section(&self, id: Uuid) -> Result<(), AppError> {
        let res = Section::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
