use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::auth::identity::authenticate;
use crate::auth::policy::{Action, Policy, Resource};
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult, PageQuery, Paginated};
use crate::types::user::{RUserCreate, UserCreateRes, UserOut};
use crate::utils::token::construct_token;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::UserCollection, Action::Create)
        .require()?;

    let (id, secret) = db.create_user(body.into_inner()).await?;
    let token = construct_token(&id.to_string(), &secret);

    Ok(ApiResponse::Created(UserCreateRes { id, token }))
}

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<PageQuery>,
) -> ApiResult<Paginated<UserOut>> {
    let actor = authenticate(&db, auth.token()).await;
    // enumerating identities is superuser-only; no filter-mode fallback here
    Policy::current()
        .authorize(actor, Resource::UserCollection, Action::List)
        .require()?;

    let (page, per_page) = query.clamp();
    let (users, count) = db.list_users_paginated(page, per_page).await?;

    Ok(ApiResponse::Ok(Paginated {
        count,
        page,
        per_page,
        results: users.into_iter().map(UserOut::from).collect(),
    }))
}
