mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use entity::question::Difficulty;
use serde_json::json;
use study_api::db::postgres_service::PostgresService;
use study_api::types::quiz::{RAnswerCreate, RCategoryCreate, RQuestionCreate};
use uuid::Uuid;

/// Canonical fixture: one category, one question, a correct and an incorrect
/// answer. Returns (question_id, correct_id, wrong_id).
async fn seed_arithmetic_quiz(db: &PostgresService) -> (Uuid, Uuid, Uuid) {
    let category = db
        .create_category(RCategoryCreate {
            name: "Arithmetic".to_string(),
        })
        .await
        .unwrap();
    let question = db
        .create_question(RQuestionCreate {
            category: category.id,
            text: "What is 2 + 2?".to_string(),
            difficulty: Difficulty::Easy,
        })
        .await
        .unwrap();
    let correct = db
        .create_answer(RAnswerCreate {
            question: question.id,
            text: "4".to_string(),
            is_correct: true,
        })
        .await
        .unwrap();
    let wrong = db
        .create_answer(RAnswerCreate {
            question: question.id,
            text: "5".to_string(),
            is_correct: false,
        })
        .await
        .unwrap();

    (question.id, correct.id, wrong.id)
}

#[tokio::test]
async fn test_quiz_crud_open_to_any_authenticated_user() {
    println!("\n\n[+] Running test: test_quiz_crud_open_to_any_authenticated_user");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_alice_id, alice_bearer) = client.create_test_user("alice", false).await;
    let (_bob_id, bob_bearer) = client.create_test_user("bob", false).await;

    // the whole create chain over HTTP, as a regular (non-super) user
    println!("[>] Alice creates a category.");
    let req = test::TestRequest::post()
        .uri("/api/quiz/categories")
        .insert_header(("Authorization", format!("Bearer {}", alice_bearer)))
        .set_json(json!({ "name": "Arithmetic" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let category_id = body["id"].as_str().unwrap().to_string();

    println!("[>] Alice creates a question in it.");
    let req = test::TestRequest::post()
        .uri("/api/quiz/questions")
        .insert_header(("Authorization", format!("Bearer {}", alice_bearer)))
        .set_json(json!({
            "category": category_id,
            "text": "What is 2 + 2?",
            "difficulty": "easy",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let question_id = body["id"].as_str().unwrap().to_string();

    println!("[>] Alice creates an answer for it.");
    let req = test::TestRequest::post()
        .uri("/api/quiz/answers")
        .insert_header(("Authorization", format!("Bearer {}", alice_bearer)))
        .set_json(json!({ "question": question_id, "text": "4", "is_correct": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // quiz material is shared: Bob reads what Alice wrote
    println!("[>] Bob reads Alice's question.");
    let req = test::TestRequest::get()
        .uri(&format!("/api/quiz/questions/{}", question_id))
        .insert_header(("Authorization", format!("Bearer {}", bob_bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["text"], "What is 2 + 2?");
    assert_eq!(body["difficulty"], "easy");

    println!("[>] Bob lists questions.");
    let req = test::TestRequest::get()
        .uri("/api/quiz/questions")
        .insert_header(("Authorization", format!("Bearer {}", bob_bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 1);

    println!("[>] Anonymous callers are rejected.");
    let req = test::TestRequest::get()
        .uri("/api/quiz/questions")
        .insert_header(("Authorization", "Bearer invalid_token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: quiz material is shared among authenticated users.");
}

#[tokio::test]
async fn test_check_answer_verdict_flow() {
    println!("\n\n[+] Running test: test_check_answer_verdict_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_uid, bearer) = client.create_test_user("alice", false).await;
    let (question_id, correct_id, wrong_id) = seed_arithmetic_quiz(&ctx.db).await;
    println!("[<] Quiz fixture seeded.");

    println!("[>] Checking the correct answer.");
    let req = test::TestRequest::post()
        .uri("/api/quiz/check_answer")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({ "question_id": question_id, "answer_id": correct_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Verdict: {}", body);
    assert_eq!(body["question_text"], "What is 2 + 2?");
    assert_eq!(body["is_correct"], true);

    println!("[>] Checking the wrong answer.");
    let req = test::TestRequest::post()
        .uri("/api/quiz/check_answer")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({ "question_id": question_id, "answer_id": wrong_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["is_correct"], false);

    // evaluation is a pure lookup; asking again changes nothing
    println!("[>] Re-checking the correct answer (idempotent).");
    let req = test::TestRequest::post()
        .uri("/api/quiz/check_answer")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({ "question_id": question_id, "answer_id": correct_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["is_correct"], true);
    println!("[/] Test passed: verdicts come straight from the stored flag.");
}

#[tokio::test]
async fn test_check_answer_missing_question_is_not_found() {
    println!("\n\n[+] Running test: test_check_answer_missing_question_is_not_found");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_uid, bearer) = client.create_test_user("alice", false).await;
    let (_question_id, correct_id, _wrong_id) = seed_arithmetic_quiz(&ctx.db).await;

    println!("[>] Checking against a question id that does not exist.");
    let req = test::TestRequest::post()
        .uri("/api/quiz/check_answer")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({ "question_id": Uuid::new_v4(), "answer_id": correct_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
    println!("[/] Test passed: unknown question is a not-found.");
}

#[tokio::test]
async fn test_check_answer_foreign_answer_is_invalid_reference() {
    println!("\n\n[+] Running test: test_check_answer_foreign_answer_is_invalid_reference");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_uid, bearer) = client.create_test_user("alice", false).await;
    let (question_id, _correct_id, _wrong_id) = seed_arithmetic_quiz(&ctx.db).await;

    // a second question with its own answer
    let other_category = ctx
        .db
        .create_category(RCategoryCreate {
            name: "Geography".to_string(),
        })
        .await
        .unwrap();
    let other_question = ctx
        .db
        .create_question(RQuestionCreate {
            category: other_category.id,
            text: "Capital of France?".to_string(),
            difficulty: Difficulty::Medium,
        })
        .await
        .unwrap();
    let foreign_answer = ctx
        .db
        .create_answer(RAnswerCreate {
            question: other_question.id,
            text: "Paris".to_string(),
            is_correct: true,
        })
        .await
        .unwrap();
    println!("[<] Second question and answer created.");

    // the answer exists, but belongs to the other question: a client error,
    // not a not-found
    println!("[>] Checking the first question against the foreign answer.");
    let req = test::TestRequest::post()
        .uri("/api/quiz/check_answer")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({ "question_id": question_id, "answer_id": foreign_answer.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_REFERENCE");

    println!("[>] A nonexistent answer id is the same client error.");
    let req = test::TestRequest::post()
        .uri("/api/quiz/check_answer")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({ "question_id": question_id, "answer_id": Uuid::new_v4() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    println!("[/] Test passed: mismatched answers are invalid references.");
}

#[tokio::test]
async fn test_question_with_dangling_category_is_invalid_reference() {
    println!("\n\n[+] Running test: test_question_with_dangling_category_is_invalid_reference");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_uid, bearer) = client.create_test_user("alice", false).await;

    println!("[>] Creating a question under a category that does not exist.");
    let req = test::TestRequest::post()
        .uri("/api/quiz/questions")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({
            "category": Uuid::new_v4(),
            "text": "Orphan question?",
            "difficulty": "hard",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_REFERENCE");
    println!("[/] Test passed: dangling parent ids are client errors.");
}

#[tokio::test]
async fn test_category_delete_cascades_to_questions_and_answers() {
    println!("\n\n[+] Running test: test_category_delete_cascades_to_questions_and_answers");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_uid, bearer) = client.create_test_user("alice", false).await;
    let (question_id, correct_id, _wrong_id) = seed_arithmetic_quiz(&ctx.db).await;

    let question = ctx.db.get_question(question_id).await.unwrap();

    println!("[>] Deleting the category.");
    let req = test::TestRequest::delete()
        .uri(&format!("/api/quiz/categories/{}", question.category_id))
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    println!("[>] Verifying the question and answers went with it.");
    assert!(ctx.db.get_question(question_id).await.is_err());
    assert!(ctx.db.get_answer(correct_id).await.is_err());
    println!("[/] Test passed: category deletion cascades two levels down.");
}

#[tokio::test]
async fn test_answer_update_cannot_flip_correctness() {
    println!("\n\n[+] Running test: test_answer_update_cannot_flip_correctness");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_uid, bearer) = client.create_test_user("alice", false).await;
    let (_question_id, _correct_id, wrong_id) = seed_arithmetic_quiz(&ctx.db).await;

    // an is_correct field in the patch is ignored; only the text moves
    println!("[>] Updating the wrong answer, trying to flip is_correct.");
    let req = test::TestRequest::put()
        .uri(&format!("/api/quiz/answers/{}", wrong_id))
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({ "text": "five", "is_correct": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["text"], "five");
    assert_eq!(body["is_correct"], false);
    println!("[/] Test passed: correctness is fixed at creation.");
}
