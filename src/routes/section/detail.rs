use actix_web::{delete, get, put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::section::Model as SectionModel;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::identity::authenticate;
use crate::auth::policy::{Action, Policy, Resource};
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::section::RSectionUpdate;

#[get("/{id}")]
async fn get(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<SectionModel> {
    let actor = authenticate(&db, auth.token()).await;
    let section = db.get_section(path.into_inner()).await?;
    Policy::current()
        .authorize(actor, Resource::Section { owner: section.owner }, Action::Read)
        .require()?;

    Ok(ApiResponse::Ok(section))
}

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RSectionUpdate>,
) -> ApiResult<SectionModel> {
    let id = path.into_inner();
    let actor = authenticate(&db, auth.token()).await;
    let section = db.get_section(id).await?;
    Policy::current()
        .authorize(actor, Resource::Section { owner: section.owner }, Action::Update)
        .require()?;

    let updated = db.update_section(id, body.into_inner()).await?;
    Ok(ApiResponse::Ok(updated))
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
    let section = db.get_section(id).await?;
    Policy::current()
        .authorize(actor, Resource::Section { owner: section.owner }, Action::Delete)
        .require()?;

    // contents under the section disappear with it (FK cascade)
    db.delete_section(id).await?;
    Ok(ApiResponse::NoContent)
}
