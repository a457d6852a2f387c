use chrono::{DateTime, NaiveDate, Utc};
use entity::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RUserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Partial merge: only supplied fields change. A supplied password must
/// come with a matching password2.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RUserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password2: Option<String>,
    pub phone_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub profile_picture: Option<String>,
}

/// Public projection of a user; never carries credential material.
#[derive(Serialize, Deserialize, Debug)]
pub struct UserOut {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_superuser: bool,
    pub phone_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UserModel> for UserOut {
    fn from(u: UserModel) -> Self {
        UserOut {
            id: u.id,
            username: u.username,
            email: u.email,
            is_superuser: u.is_superuser,
            phone_number: u.phone_number,
            birth_date: u.birth_date,
            profile_picture: u.profile_picture,
            created_at: u.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserCreateRes {
    pub id: Uuid,
    /// Access token, shown exactly once; only its hash is stored.
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserRegenerateRes {
    pub token: String,
}
