//! Bearer credential -> Actor resolution. Fails closed: any decode,
//! lookup or verification failure resolves to `Actor::Anonymous`.

use crate::auth::policy::Actor;
use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::utils::token::{extract_token_parts, verify};

pub async fn authenticate(db: &PostgresService, bearer: &str) -> Actor {
    let admin_key = &config().admin_key;
    if !admin_key.is_empty() && bearer == admin_key {
        return Actor::Root;
    }

    let Some((user_id, secret)) = extract_token_parts(bearer) else {
        return Actor::Anonymous;
    };

    let user = match db.get_user_by_id(&user_id).await {
        Ok(user) => user,
        Err(_) => return Actor::Anonymous,
    };

    match verify(&secret, &user.token) {
        Ok(true) => Actor::User {
            id: user.id,
            is_superuser: user.is_superuser,
        },
        _ => Actor::Anonymous,
    }
}
