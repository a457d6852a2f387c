use actix_web::{web, App};
use std::sync::Arc;
use study_api::{
    db::postgres_service::PostgresService, types::user::RUserCreate,
    utils::token::construct_token,
};
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(study_api::routes::configure_routes)
    }

    /// Create a user straight through the repository and return its id plus
    /// a ready-to-send bearer credential.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: &str, is_superuser: bool) -> (Uuid, String) {
        let (id, secret) = self
            .db
            .create_user(RUserCreate {
                username: username.to_string(),
                email: format!("{username}@test.com"),
                password: "s3cret-pass".to_string(),
                password2: "s3cret-pass".to_string(),
                is_superuser,
                phone_number: None,
                birth_date: None,
                profile_picture: None,
            })
            .await
            .expect("Failed to create test user");

        (id, construct_token(&id.to_string(), &secret))
    }

    #[allow(dead_code)]
    pub async fn create_test_superuser(&self, username: &str) -> (Uuid, String) {
        self.create_test_user(username, true).await
    }
}
