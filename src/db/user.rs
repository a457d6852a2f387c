use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::user::{RUserCreate, RUserUpdate};
use crate::utils::token::{encrypt, new_id, new_token};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn list_users_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<UserModel>, u64), AppError> {
        let finder = User::find().order_by_asc(Column::CreatedAt);
        let total = finder.clone().count(&self.db).await?;
        let items = finder.paginate(&self.db, per_page).fetch_page(page).await?;
        Ok((items, total))
    }

    /// Create a user. Validates required fields and the password
    /// confirmation, hashes the password, issues the initial API secret and
    /// returns it in the clear exactly once. Nothing persists on failure.
    pub async fn create_user(&self, payload: RUserCreate) -> Result<(Uuid, String), AppError> {
        if payload.username.trim().is_empty() {
            return Err(AppError::Validation("username: must not be empty".into()));
        }
        if payload.email.trim().is_empty() {
            return Err(AppError::Validation("email: must not be empty".into()));
        }
        if payload.password.is_empty() {
            return Err(AppError::Validation("password: must not be empty".into()));
        }
        if payload.password != payload.password2 {
            return Err(AppError::Validation("password2: passwords do not match".into()));
        }

        let password_hash =
            encrypt(&payload.password).map_err(|_| AppError::Internal("password hashing failed".into()))?;
        let secret = new_token();
        let token_hash =
            encrypt(&secret).map_err(|_| AppError::Internal("token hashing failed".into()))?;

        let uid = new_id();
        let now = Utc::now();
        let txn = self.db.begin().await?;

        if count_by(&txn, Column::Username.eq(&*payload.username)).await? > 0 {
            txn.rollback().await?;
            return Err(AppError::Conflict("username: already taken".into()));
        }
        if count_by(&txn, Column::Email.eq(&*payload.email)).await? > 0 {
            txn.rollback().await?;
            return Err(AppError::Conflict("email: already registered".into()));
        }

        User::insert(UserActive {
            id: Set(uid),
            username: Set(payload.username),
            email: Set(payload.email),
            password_hash: Set(password_hash),
            token: Set(token_hash),
            is_superuser: Set(payload.is_superuser),
            phone_number: Set(payload.phone_number),
            birth_date: Set(payload.birth_date),
            profile_picture: Set(payload.profile_picture),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok((uid, secret))
    }

    /// Partial merge: only supplied fields change. A supplied password must
    /// come with a matching password2 and is re-hashed before persistence.
    pub async fn update_user(
        &self,
        user_id: Uuid,
        patch: RUserUpdate,
    ) -> Result<UserModel, AppError> {
        if let Some(password) = &patch.password {
            if password.is_empty() {
                return Err(AppError::Validation("password: must not be empty".into()));
            }
            match &patch.password2 {
                Some(p2) if p2 == password => {}
                _ => {
                    return Err(AppError::Validation("password2: passwords do not match".into()))
                }
            }
        }

        let txn = self.db.begin().await?;
        let current = User::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?;

        if let Some(username) = &patch.username {
            if *username != current.username
                && count_by(&txn, Column::Username.eq(&**username)).await? > 0
            {
                txn.rollback().await?;
                return Err(AppError::Conflict("username: already taken".into()));
            }
        }
        if let Some(email) = &patch.email {
            if *email != current.email && count_by(&txn, Column::Email.eq(&**email)).await? > 0 {
                txn.rollback().await?;
                return Err(AppError::Conflict("email: already registered".into()));
            }
        }

        let mut am: UserActive = current.into();
        if let Some(username) = patch.username {
            am.username = Set(username);
        }
        if let Some(email) = patch.email {
            am.email = Set(email);
        }
        if let Some(password) = patch.password {
            let hash = encrypt(&password)
                .map_err(|_| AppError::Internal("password hashing failed".into()))?;
            am.password_hash = Set(hash);
        }
        if let Some(phone_number) = patch.phone_number {
            am.phone_number = Set(Some(phone_number));
        }
        if let Some(birth_date) = patch.birth_date {
            am.birth_date = Set(Some(birth_date));
        }
        if let Some(profile_picture) = patch.profile_picture {
            am.profile_picture = Set(Some(profile_picture));
        }
        am.updated_at = Set(Utc::now());

        let updated = am.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    pub async fn delete_user(&self, user_id: Uuid) -> Result<(), AppError> {
        let res = User::delete_by_id(user_id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// Rotate the user's API secret; the old one stops verifying atomically.
    pub async fn regenerate_user_token(&self, user_id: &Uuid) -> Result<String, AppError> {
        let secret = new_token();
        let hash = encrypt(&secret).map_err(|_| AppError::Internal("token hashing failed".into()))?;

        let txn = self.db.begin().await?;
        let user = User::find_by_id(*user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?;
        let mut am: UserActive = user.into();
        am.token = Set(hash);
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;
        txn.commit().await?;

        Ok(secret)
    }
}

async fn count_by<C: ConnectionTrait>(
    conn: &C,
    cond: sea_orm::sea_query::SimpleExpr,
) -> Result<u64, AppError> {
    Ok(User::find().filter(cond).count(conn).await?)
}
