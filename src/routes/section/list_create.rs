use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::section::Model as SectionModel;
use std::sync::Arc;

use crate::auth::identity::authenticate;
use crate::auth::policy::{Action, Policy, Resource, ResourceKind};
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, PageQuery, Paginated};
use crate::types::section::RSectionCreate;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RSectionCreate>,
) -> ApiResult<SectionModel> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::SectionCollection, Action::Create)
        .require()?;

    // sections are always bound to a real account; the admin key has none
    let owner = actor.id().ok_or_else(|| {
        AppError::BadRequest("the admin key cannot own sections; use a user account".into())
    })?;

    let section = db.create_section(owner, body.into_inner()).await?;
    Ok(ApiResponse::Created(section))
}

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<PageQuery>,
) -> ApiResult<Paginated<SectionModel>> {
    let actor = authenticate(&db, auth.token()).await;
    let policy = Policy::current();
    policy
        .authorize(actor, Resource::SectionCollection, Action::List)
        .require()?;

    // filter-mode: foreign sections are omitted by the query, not rejected
    let scope = policy.scope(actor, ResourceKind::Section);
    let (page, per_page) = query.clamp();
    let (sections, count) = db.list_sections_paginated(scope, page, per_page).await?;

    Ok(ApiResponse::Ok(Paginated {
        count,
        page,
        per_page,
        results: sections,
    }))
}
