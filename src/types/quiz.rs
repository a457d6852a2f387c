use entity::question::Difficulty;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RCategoryCreate {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RCategoryUpdate {
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RQuestionCreate {
    pub category: Uuid,
    pub text: String,
    pub difficulty: Difficulty,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RQuestionUpdate {
    pub text: Option<String>,
    pub difficulty: Option<Difficulty>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RAnswerCreate {
    pub question: Uuid,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// is_correct is set once at creation and stays put; only the text can move.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RAnswerUpdate {
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RCheckAnswer {
    pub question_id: Uuid,
    pub answer_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CheckAnswerRes {
    pub question_text: String,
    pub is_correct: bool,
}
