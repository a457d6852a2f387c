use actix_web::{delete, get, post, put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::question::Model as QuestionModel;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::identity::authenticate;
use crate::auth::policy::{Action, Policy, Resource};
use crate::db::postgres_service::PostgresService;
use crate::types::quiz::{RQuestionCreate, RQuestionUpdate};
use crate::types::response::{ApiResponse, ApiResult, PageQuery, Paginated};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RQuestionCreate>,
) -> ApiResult<QuestionModel> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::Quiz, Action::Create)
        .require()?;

    let question = db.create_question(body.into_inner()).await?;
    Ok(ApiResponse::Created(question))
}

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<PageQuery>,
) -> ApiResult<Paginated<QuestionModel>> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::Quiz, Action::List)
        .require()?;

    let (page, per_page) = query.clamp();
    let (questions, count) = db.list_questions_paginated(page, per_page).await?;

    Ok(ApiResponse::Ok(Paginated {
        count,
        page,
        per_page,
        results: questions,
    }))
}

#[get("/{id}")]
async fn get(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<QuestionModel> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::Quiz, Action::Read)
        .require()?;

    let question = db.get_question(path.into_inner()).await?;
    Ok(ApiResponse::Ok(question))
}

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RQuestionUpdate>,
) -> ApiResult<QuestionModel> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::Quiz, Action::Update)
        .require()?;

    let updated = db.update_question(path.into_inner(), body.into_inner()).await?;
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

    db.delete_question(path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
