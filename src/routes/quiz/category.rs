use actix_web::{delete, get, post, put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::question_category::Model as CategoryModel;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::identity::authenticate;
use crate::auth::policy::{Action, Policy, Resource};
use crate::db::postgres_service::PostgresService;
use crate::types::quiz::{RCategoryCreate, RCategoryUpdate};
use crate::types::response::{ApiResponse, ApiResult, PageQuery, Paginated};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RCategoryCreate>,
) -> ApiResult<CategoryModel> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::Quiz, Action::Create)
        .require()?;

    let category = db.create_category(body.into_inner()).await?;
    Ok(ApiResponse::Created(category))
}

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<PageQuery>,
) -> ApiResult<Paginated<CategoryModel>> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::Quiz, Action::List)
        .require()?;

    let (page, per_page) = query.clamp();
    let (categories, count) = db.list_categories_paginated(page, per_page).await?;

    Ok(ApiResponse::Ok(Paginated {
        count,
        page,
        per_page,
        results: categories,
    }))
}

#[get("/{id}")]
async fn get(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<CategoryModel> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::Quiz, Action::Read)
        .require()?;

    let category = db.get_category(path.into_inner()).await?;
    Ok(ApiResponse::Ok(category))
}

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RCategoryUpdate>,
) -> ApiResult<CategoryModel> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::Quiz, Action::Update)
        .require()?;

    let updated = db.update_category(path.into_inner(), body.into_inner()).await?;
    Ok(ApiResponse::Ok(updated))
}

#[delete("/{id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::Quiz, Action::Delete)
        .require()?;

    // questions and answers under the category go with it
    db.delete_category(path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
