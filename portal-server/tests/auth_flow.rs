//! Login and role-gating behavior over the HTTP surface

mod common;

use common::{app, login, request};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn login_failure_is_generic_for_both_fields() {
    let app = app();

    let (wrong_password_status, wrong_password) = request(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "admin@hrmetric.com", "password": "wrong"})),
    )
    .await;
    let (unknown_email_status, unknown_email) = request(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "nobody@hrmetric.com", "password": "password123"})),
    )
    .await;

    assert_eq!(wrong_password_status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email_status, StatusCode::BAD_REQUEST);
    // Identical payloads: the response must not reveal which field was wrong
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password["message"], "Email or password incorrect");
}

#[tokio::test]
async fn login_success_sets_identity_visible_via_me() {
    let app = app();
    let token = login(&app, "budi@hrmetric.com").await;

    let (status, body) = request(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "budi@hrmetric.com");
    assert_eq!(body["data"]["role"], "manager");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = app();
    let (status, _) = request(&app, "GET", "/api/employees", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(&app, "GET", "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn policies_are_publicly_readable() {
    let app = app();
    let (status, body) = request(&app, "GET", "/api/policies", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 6);

    let (status, body) = request(&app, "GET", "/api/policies/1", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Promosi Karyawan");
}

#[tokio::test]
async fn karyawan_reads_but_cannot_manage() {
    let app = app();
    let token = login(&app, "siti@hrmetric.com").await;

    // Reads are open to any authenticated role
    let (status, _) = request(&app, "GET", "/api/employees", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = request(&app, "GET", "/api/evaluations/1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    // Writes are soft-denied with 403, not an error page
    let (status, _) = request(
        &app,
        "POST",
        "/api/employees",
        Some(&token),
        Some(json!({
            "name": "Rina Kusuma",
            "position": "Desainer",
            "department": "Pemasaran",
            "hireDate": "2024-01-08"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = request(
        &app,
        "POST",
        "/api/evaluations",
        Some(&token),
        Some(json!({
            "employeeId": 1,
            "criteriaScores": [{"criteriaId": 1, "score": 80}]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn approval_queue_is_leadership_only() {
    let app = app();

    let manager = login(&app, "budi@hrmetric.com").await;
    let (status, _) = request(&app, "GET", "/api/evaluations/pending", Some(&manager), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let pemimpin = login(&app, "ahmad@hrmetric.com").await;
    let (status, body) =
        request(&app, "GET", "/api/evaluations/pending", Some(&pemimpin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn document_upload_is_karyawan_only() {
    let app = app();

    let payload = json!({
        "title": "Sertifikat Pelatihan",
        "description": "Sertifikat pelatihan kepemimpinan",
        "fileName": "sertifikat.pdf",
        "fileType": "application/pdf",
        "employeeId": 2,
        "category": "Sertifikat"
    });

    let manager = login(&app, "budi@hrmetric.com").await;
    let (status, _) = request(
        &app,
        "POST",
        "/api/documents",
        Some(&manager),
        Some(payload.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let karyawan = login(&app, "siti@hrmetric.com").await;
    let (status, body) =
        request(&app, "POST", "/api/documents", Some(&karyawan), Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "pending");
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let app = app();
    let (status, _) = request(
        &app,
        "GET",
        "/api/employees",
        Some("not-a-real-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
