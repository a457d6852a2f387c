use actix_web::{delete, get, put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::identity::authenticate;
use crate::auth::policy::{Action, Policy, Resource};
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserUpdate, UserOut};

#[get("/{id}")]
async fn get(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<UserOut> {
    let id = path.into_inner();
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::User { id }, Action::Read)
        .require()?;

    let user = db.get_user_by_id(&id).await?;
    Ok(ApiResponse::Ok(user.into()))
}

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<UserOut> {
    let id = path.into_inner();
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::User { id }, Action::Update)
        .require()?;

    let updated = db.update_user(id, body.into_inner()).await?;
    Ok(ApiResponse::Ok(updated.into()))
}

#[delete("/{id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    let id = path.into_inner();
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::User { id }, Action::Delete)
        .require()?;

    db.delete_user(id).await?;
    Ok(ApiResponse::NoContent)
}
