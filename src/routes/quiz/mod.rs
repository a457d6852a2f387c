pub mod answer;
pub mod category;
pub mod check_answer;
pub mod question;
