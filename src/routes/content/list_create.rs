use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::content::Model as ContentModel;
use std::sync::Arc;

use crate::auth::identity::authenticate;
use crate::auth::policy::{Action, Policy, Resource, ResourceKind};
use crate::db::postgres_service::PostgresService;
use crate::types::content::RContentCreate;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, PageQuery, Paginated};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RContentCreate>,
) -> ApiResult<ContentModel> {
    let actor = authenticate(&db, auth.token()).await;

    // resolve the target section first: creating content is authorized
    // against the parent section's owner, not the content itself
    let section = match db.get_section(body.section).await {
        Ok(section) => section,
        Err(AppError::NotFound) => {
            return Err(AppError::InvalidReference("section: no such section".into()))
        }
        Err(e) => return Err(e),
    };
    Policy::current()
        .authorize(
            actor,
            Resource::Content { section_owner: section.owner },
            Action::Create,
        )
        .require()?;

    let content = db.create_content(body.into_inner()).await?;
    Ok(ApiResponse::Created(content))
}

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<PageQuery>,
) -> ApiResult<Paginated<ContentModel>> {
    let actor = authenticate(&db, auth.token()).await;
    let policy = Policy::current();
    policy
        .authorize(actor, Resource::ContentCollection, Action::List)
        .require()?;

    let scope = policy.scope(actor, ResourceKind::Content);
    let (page, per_page) = query.clamp();
    let (contents, count) = db.list_contents_paginated(scope, page, per_page).await?;

    Ok(ApiResponse::Ok(Paginated {
        count,
        page,
        per_page,
        results: contents,
    }))
}
