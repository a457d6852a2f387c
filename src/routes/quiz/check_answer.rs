use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::auth::identity::authenticate;
use crate::auth::policy::{Action, Policy, Resource};
use crate::db::postgres_service::PostgresService;
use crate::types::quiz::{CheckAnswerRes, RCheckAnswer};
use crate::types::response::{ApiResponse, ApiResult};

/// Evaluate a picked answer against its question. Correctness is the
/// stored flag, looked up, never computed.
#[post("")]
async fn check_answer(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RCheckAnswer>,
) -> ApiResult<CheckAnswerRes> {
    let actor = authenticate(&db, auth.token()).await;
    Policy::current()
        .authorize(actor, Resource::Quiz, Action::Read)
        .require()?;

    let verdict = db.check_answer(body.question_id, body.answer_id).await?;
    Ok(ApiResponse::Ok(verdict))
}
