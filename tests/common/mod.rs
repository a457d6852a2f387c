use std::sync::Arc;
use study_api::config::{EnvConfig, QuizWritePolicy, CONFIG};
use study_api::db::postgres_service::PostgresService;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

/// Static admin key the test config hands to `authenticate`.
#[allow(dead_code)]
pub const TEST_ADMIN_KEY: &str = "test-admin-key";

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        CONFIG.get_or_init(test_config);

        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "unused".to_string(),
        admin_key: TEST_ADMIN_KEY.to_string(),
        quiz_write_policy: QuizWritePolicy::Any,
    }
}

// Test data helpers
pub mod test_data {
    use study_api::types::content::RContentCreate;
    use study_api::types::section::RSectionCreate;
    use study_api::types::user::RUserCreate;
    use uuid::Uuid;

    #[allow(dead_code)]
    pub fn sample_user(username: &str) -> RUserCreate {
        RUserCreate {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password: "s3cret-pass".to_string(),
            password2: "s3cret-pass".to_string(),
            is_superuser: false,
            phone_number: None,
            birth_date: None,
            profile_picture: None,
        }
    }

    #[allow(dead_code)]
    pub fn sample_section(title: &str) -> RSectionCreate {
        RSectionCreate {
            title: title.to_string(),
            description: "A section for testing".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_content(section: Uuid, title: &str) -> RContentCreate {
        RContentCreate {
            section,
            title: title.to_string(),
            text: "Some study material".to_string(),
            file: None,
        }
    }
}
