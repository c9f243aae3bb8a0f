mod helpers;

use axum::http::StatusCode;
use helpers::{empty_request, get_json_body, json_request, make_test_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn create_and_get_lecturer() {
    let (app, _state) = make_test_app().await;

    let payload = json!({
        "name": "Dr. Mwangi",
        "email": "mwangi@university.ac",
        "course": "CS101"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/lecturers", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["name"], "Dr. Mwangi");
    assert_eq!(json["data"]["course"], "CS101");
    let id = json["data"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(empty_request("GET", &format!("/api/lecturers/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["email"], "mwangi@university.ac");
    assert!(json["data"]["createdAt"].as_str().is_some());
}

#[tokio::test]
async fn create_lecturer_rejects_invalid_email() {
    let (app, _state) = make_test_app().await;

    let payload = json!({
        "name": "Dr. Mwangi",
        "email": "not-an-email",
        "course": "CS101"
    });
    let response = app
        .oneshot(json_request("POST", "/api/lecturers", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn create_lecturer_rejects_duplicate_email() {
    let (app, _state) = make_test_app().await;

    let payload = json!({
        "name": "Dr. Mwangi",
        "email": "mwangi@university.ac",
        "course": "CS101"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/lecturers", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_request("POST", "/api/lecturers", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("already exists")
    );
}

#[tokio::test]
async fn get_missing_lecturer_is_404() {
    let (app, _state) = make_test_app().await;

    let response = app
        .oneshot(empty_request("GET", "/api/lecturers/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Lecturer not found");
}

#[tokio::test]
async fn update_lecturer_is_partial_and_returns_new_document() {
    let (app, _state) = make_test_app().await;

    let payload = json!({
        "name": "Dr. Njeri",
        "email": "njeri@university.ac",
        "course": "CS202"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/lecturers", &payload))
        .await
        .unwrap();
    let created = get_json_body(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/lecturers/{id}"),
            &json!({ "course": "CS301" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["course"], "CS301");
    assert_eq!(json["data"]["name"], "Dr. Njeri");

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/lecturers/999",
            &json!({ "course": "CS301" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_lecturer_returns_confirmation() {
    let (app, _state) = make_test_app().await;

    let payload = json!({
        "name": "Dr. Njeri",
        "email": "njeri@university.ac",
        "course": "CS202"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/lecturers", &payload))
        .await
        .unwrap();
    let created = get_json_body(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/lecturers/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Lecturer deleted successfully");

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/lecturers/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again still answers with a confirmation.
    let response = app
        .oneshot(empty_request("DELETE", &format!("/api/lecturers/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
