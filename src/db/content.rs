use crate::auth::policy::ListScope;
use crate::db::postgres_service::PostgresService;
use crate::types::content::{RContentCreate, RContentUpdate};
use crate::types::error::AppError;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::content::{ActiveModel as ContentActive, Column, Entity as Content, Model as ContentModel};
use entity::section::{self, Model as SectionModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

impl PostgresService {
    /// The caller must already be authorized against the parent section.
    pub async fn create_content(&self, payload: RContentCreate) -> Result<ContentModel, AppError> {
        if payload.title.trim().is_empty() {
            return Err(AppError::Validation("title: must not be empty".into()));
        }
        Ok(ContentActive {
            id: Set(new_id()),
            section_id: Set(payload.section),
            title: Set(payload.title),
            text: Set(payload.text),
            file: Set(payload.file),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?)
    }

    /// Fetch a content together with its parent section; the section carries
    /// the owner that authorization is evaluated against.
    pub async fn get_content_with_section(
        &self,
        id: Uuid,
    ) -> Result<(ContentModel, SectionModel), AppError> {
        match Content::find_by_id(id)
            .find_also_related(section::Entity)
            .one(&self.db)
            .await?
        {
            Some((content, Some(parent))) => Ok((content, parent)),
            // FK guarantees a parent; a missing one means the row is gone
            Some((_, None)) | None => Err(AppError::NotFound),
        }
    }

    pub async fn list_contents_paginated(
        &self,
        scope: ListScope,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ContentModel>, u64), AppError> {
        let mut finder = Content::find().order_by_asc(Column::CreatedAt);
        match scope {
            ListScope::All => {}
            ListScope::OwnedBy(uid) | ListScope::SelfOnly(uid) => {
                finder = finder
                    .inner_join(section::Entity)
                    .filter(section::Column::Owner.eq(uid));
            }
            ListScope::Nothing => return Ok((Vec::new(), 0)),
        }
        let total = finder.clone().count(&self.db).await?;
        let items = finder.paginate(&self.db, per_page).fetch_page(page).await?;
        Ok((items, total))
    }

    /// Partial merge; the parent section is never touched (no reparenting).
    pub async fn update_content(
        &self,
        id: Uuid,
        patch: RContentUpdate,
    ) -> Result<ContentModel, AppError> {
        let (current, _) = self.get_content_with_section(id).await?;
        let mut am: ContentActive = current.into();
        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(AppError::Validation("title: must not be empty".into()));
            }
            am.title = Set(title);
        }
        if let Some(text) = patch.text {
            am.text = Set(text);
        }
        if let Some(file) = patch.file {
            am.file = Set(Some(file));
        }
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_content(&self, id: Uuid) -> Result<(), AppError> {
        let res = Content::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
