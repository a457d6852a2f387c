use std::env;
use std::sync::OnceLock;

/// Who may create/update/delete quiz categories, questions and answers.
/// The original behavior is `Any` (every authenticated caller); keep it a
/// deployment choice rather than hard-coding a stricter rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizWritePolicy {
    Any,
    Superuser,
}

impl QuizWritePolicy {
    fn parse(raw: &str) -> Self {
        match raw {
            "superuser" => QuizWritePolicy::Superuser,
            _ => QuizWritePolicy::Any,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub admin_key: String,
    pub quiz_write_policy: QuizWritePolicy,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env("PORT").parse().unwrap_or(8080),
            db_url: Self::get_env("POSTGRES_URI"),
            admin_key: Self::get_env("ADMIN_KEY"),
            quiz_write_policy: QuizWritePolicy::parse(
                &env::var("QUIZ_WRITE_POLICY").unwrap_or_default(),
            ),
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
