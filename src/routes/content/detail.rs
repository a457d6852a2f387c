use actix_web::{delete, get, put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::content::Model as ContentModel;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::identity::authenticate;
use crate::auth::policy::{Action, Policy, Resource};
use crate::db::postgres_service::PostgresService;
use crate::types::content::RContentUpdate;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
async fn get(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<ContentModel> {
    let actor = authenticate(&db, auth.token()).await;
    let (content, parent) = db.get_content_with_section(path.into_inner()).await?;
    Policy::current()
        .authorize(
            actor,
            Resource::Content { section_owner: parent.owner },
            Action::Read,
        )
        .require()?;

    Ok(ApiResponse::Ok(content))
}

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RContentUpdate>,
) -> ApiResult<ContentModel> {
    let id = path.into_inner();
    let actor = authenticate(&db, auth.token()).await;
    let (_, parent) = db.get_content_with_section(id).await?;
    Policy::current()
        .authorize(
            actor,
            Resource::Content { section_owner: parent.owner },
            Action::Update,
        )
        .require()?;

    let updated = db.update_content(id, body.into_inner()).await?;
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
    let (_, parent) = db.get_content_with_section(id).await?;
    Policy::current()
        .authorize(
            actor,
            Resource::Content { section_owner: parent.owner },
            Action::Delete,
        )
        .require()?;

    db.delete_content(id).await?;
    Ok(ApiResponse::NoContent)
}
