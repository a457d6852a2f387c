use actix_web::{delete, get, post, put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::answer::Model as AnswerModel;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::identity::authenticate;
use crate::auth::policy::{Action, Policy, Resource};
use crate::db::postgres_service::PostgresService;
use crate::types::quiz::{RAnswerCreate, RAnswerUpdate};
use crate::types::response::{ApiResponse, ApiResult, PageQuery, Paginated};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RAnswerCreate>,
) -> ApiResult<AnswerModel> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::Quiz, Action::Create)
        .require()?;

    let answer = db.create_answer(body.into_inner()).await?;
    Ok(ApiResponse::Created(answer))
}

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<PageQuery>,
) -> ApiResult<Paginated<AnswerModel>> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::Quiz, Action::List)
        .require()?;

    let (page, per_page) = query.clamp();
    let (answers, count) = db.list_answers_paginated(page, per_page).await?;

    Ok(ApiResponse::Ok(Paginated {
        count,
        page,
        per_page,
        results: answers,
    }))
}

#[get("/{id}")]
async fn get(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<AnswerModel> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::Quiz, Action::Read)
        .require()?;

    let answer = db.get_answer(path.into_inner()).await?;
    Ok(ApiResponse::Ok(answer))
}

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RAnswerUpdate>,
) -> ApiResult<AnswerModel> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::Quiz, Action::Update)
        .require()?;

    let updated = db.update_answer(path.into_inner(), body.into_inner()).await?;
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

    db.delete_answer(path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
