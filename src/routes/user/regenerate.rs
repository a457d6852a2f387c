use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::auth::identity::authenticate;
use crate::auth::policy::Actor;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRegenerateRes;
use crate::utils::token::construct_token;

/// Rotate the caller's API secret. The previous token stops verifying the
/// moment the new hash lands; the new token is returned exactly once.
#[post("/regenerate")]
async fn regenerate(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<UserRegenerateRes> {
    let actor = authenticate(&db, auth.token()).await;
    let user_id = match actor {
        Actor::User { id, .. } => id,
        Actor::Root => {
            return Err(AppError::BadRequest("the admin key has no token to rotate".into()))
        }
        Actor::Anonymous => return Err(AppError::Unauthorized),
    };

    let secret = db.regenerate_user_token(&user_id).await?;

    Ok(ApiResponse::Ok(UserRegenerateRes {
        token: construct_token(&user_id.to_string(), &secret),
    }))
}
