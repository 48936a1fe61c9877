//! End-to-end evaluation, scoring, and catalog behavior

mod common;

use common::{app, login, request};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn submission_updates_scores_and_approval_is_audit_only() {
    let app = app();
    let manager = login(&app, "budi@hrmetric.com").await;

    // Dewi starts at 78/82 (seed)
    let (_, before) = request(&app, "GET", "/api/employees/3", Some(&manager), None).await;
    assert_eq!(before["data"]["performance"], 78);
    assert_eq!(before["data"]["personality"], 82);

    // Performance-only submission: weights 20/30, scores 80/60 -> 68
    let (status, submitted) = request(
        &app,
        "POST",
        "/api/evaluations",
        Some(&manager),
        Some(json!({
            "employeeId": 3,
            "criteriaScores": [
                {"criteriaId": 1, "score": 80},
                {"criteriaId": 2, "score": 60}
            ],
            "overallComment": "Perlu peningkatan kualitas kerja"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{submitted}");
    assert_eq!(submitted["data"]["status"], "pending");
    let evaluation_id = submitted["data"]["id"].as_u64().unwrap();

    // Scores updated at submission time; unscored personality untouched
    let (_, after) = request(&app, "GET", "/api/employees/3", Some(&manager), None).await;
    assert_eq!(after["data"]["performance"], 68);
    assert_eq!(after["data"]["personality"], 82);

    // Leadership approves; scores do not move
    let pemimpin = login(&app, "ahmad@hrmetric.com").await;
    let (status, approved) = request(
        &app,
        "POST",
        &format!("/api/evaluations/{evaluation_id}/approve"),
        Some(&pemimpin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["data"]["status"], "approved");
    assert_eq!(approved["data"]["approvedBy"], 4);

    // Second approval attempt is rejected, state unchanged
    let (status, _) = request(
        &app,
        "POST",
        &format!("/api/evaluations/{evaluation_id}/approve"),
        Some(&pemimpin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, unchanged) = request(&app, "GET", "/api/employees/3", Some(&manager), None).await;
    assert_eq!(unchanged["data"]["performance"], 68);
}

#[tokio::test]
async fn submission_against_unknown_employee_is_not_found() {
    let app = app();
    let manager = login(&app, "budi@hrmetric.com").await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/evaluations",
        Some(&manager),
        Some(json!({
            "employeeId": 999,
            "criteriaScores": [{"criteriaId": 1, "score": 80}]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn criteria_weight_cap_is_enforced_over_http() {
    let app = app();
    let admin = login(&app, "admin@hrmetric.com").await;

    // Seeded performance weights: 20 + 30 = 50. Another 30 fits...
    let (status, _) = request(
        &app,
        "POST",
        "/api/criteria",
        Some(&admin),
        Some(json!({
            "name": "Produktivitas",
            "description": "Volume hasil kerja",
            "category": "performance",
            "weight": 30
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // ...but the next 30 would land at 110, 10 over the cap
    let (status, body) = request(
        &app,
        "POST",
        "/api/criteria",
        Some(&admin),
        Some(json!({
            "name": "Ketahanan",
            "description": "Konsistensi di bawah tekanan",
            "category": "performance",
            "weight": 30
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("performance"), "{message}");
    assert!(message.contains("by 10"), "{message}");

    // Catalog unchanged by the rejected add
    let (_, list) = request(
        &app,
        "GET",
        "/api/criteria?category=performance",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(list["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn promotion_candidates_are_ranked_and_limited() {
    let app = app();
    let token = login(&app, "siti@hrmetric.com").await;

    let (status, body) = request(
        &app,
        "GET",
        "/api/promotions/candidates?limit=3",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let candidates = body["data"].as_array().unwrap();
    assert_eq!(candidates.len(), 3);

    // Budi: 92*0.6 + 87*0.4 = 90.0; Siti: 88*0.6 + 90*0.4 = 88.8
    assert_eq!(candidates[0]["name"], "Budi Santoso");
    assert_eq!(candidates[0]["promotionScore"], 90.0);
    assert_eq!(candidates[0]["eligible"], true);
    assert_eq!(candidates[1]["name"], "Siti Rahayu");

    let scores: Vec<f64> = candidates
        .iter()
        .map(|c| c["promotionScore"].as_f64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{scores:?}");
}

#[tokio::test]
async fn deleting_an_employee_removes_their_evaluations() {
    let app = app();
    let admin = login(&app, "admin@hrmetric.com").await;

    // Siti (employee 2) has the seeded pending evaluation
    let (_, before) = request(
        &app,
        "GET",
        "/api/evaluations/employee/2",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(before["data"].as_array().unwrap().len(), 1);

    let (status, _) = request(&app, "DELETE", "/api/employees/2", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = request(
        &app,
        "GET",
        "/api/evaluations/employee/2",
        Some(&admin),
        None,
    )
    .await;
    assert!(after["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn department_delete_is_guarded_by_references() {
    let app = app();
    let admin = login(&app, "admin@hrmetric.com").await;

    // SDM is referenced by Dewi (employee 3)
    let (status, _) = request(&app, "DELETE", "/api/departments/3", Some(&admin), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Remove the referencing employee, then the delete goes through
    let (status, _) = request(&app, "DELETE", "/api/employees/3", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = request(&app, "DELETE", "/api/departments/3", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn document_review_never_moves_backwards() {
    let app = app();
    let manager = login(&app, "budi@hrmetric.com").await;

    // Seeded document 2 is pending
    let (status, body) = request(
        &app,
        "POST",
        "/api/documents/2/review",
        Some(&manager),
        Some(json!({"status": "reviewed", "comments": "Sudah diperiksa"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "reviewed");

    let (status, _) = request(
        &app,
        "POST",
        "/api/documents/2/review",
        Some(&manager),
        Some(json!({"status": "pending"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = request(
        &app,
        "POST",
        "/api/documents/2/review",
        Some(&manager),
        Some(json!({"status": "approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "approved");
    // Review comments from the earlier step survive
    assert_eq!(body["data"]["comments"], "Sudah diperiksa");
}
