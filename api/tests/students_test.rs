mod helpers;

use axum::http::StatusCode;
use db::models::lecturer::Model as LecturerModel;
use helpers::{empty_request, get_json_body, json_request, make_test_app};
use serde_json::json;
use tower::ServiceExt;

async fn seed_lecturers(db: &sea_orm::DatabaseConnection) -> (LecturerModel, LecturerModel) {
    let l1 = LecturerModel::create(db, "Dr. Mwangi", "mwangi@university.ac", "CS101")
        .await
        .unwrap();
    let l2 = LecturerModel::create(db, "Dr. Njeri", "njeri@university.ac", "CS202")
        .await
        .unwrap();
    (l1, l2)
}

#[tokio::test]
async fn create_student_with_selections() {
    let (app, state) = make_test_app().await;
    let (l1, l2) = seed_lecturers(state.db()).await;

    let payload = json!({
        "firstName": "Amina",
        "lastName": "Otieno",
        "email": "amina@university.ac",
        "schoolId": "S-1001",
        "selections": [
            { "lecturerId": l1.id },
            { "lecturerId": l2.id, "marks": 64.0 }
        ]
    });
    let response = app
        .oneshot(json_request("POST", "/api/students", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["firstName"], "Amina");
    assert_eq!(json["data"]["schoolId"], "S-1001");

    let selections = json["data"]["selections"].as_array().unwrap();
    assert_eq!(selections.len(), 2);
    assert_eq!(selections[0]["lecturer"]["name"], "Dr. Mwangi");
    assert_eq!(selections[1]["marks"], 64.0);
}

#[tokio::test]
async fn create_student_rejects_duplicate_school_id() {
    let (app, _state) = make_test_app().await;

    let payload = json!({
        "firstName": "Amina",
        "lastName": "Otieno",
        "email": "amina@university.ac",
        "schoolId": "S-1001"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/students", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let payload = json!({
        "firstName": "Brian",
        "lastName": "Kip",
        "email": "brian@university.ac",
        "schoolId": "S-1001"
    });
    let response = app
        .oneshot(json_request("POST", "/api/students", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert!(json["message"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn get_missing_student_is_404() {
    let (app, _state) = make_test_app().await;

    let response = app
        .oneshot(empty_request("GET", "/api/students/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Student not found");
}

#[tokio::test]
async fn update_student_is_partial() {
    let (app, _state) = make_test_app().await;

    let payload = json!({
        "firstName": "Amina",
        "lastName": "Otieno",
        "email": "amina@university.ac",
        "schoolId": "S-1001"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/students", &payload))
        .await
        .unwrap();
    let created = get_json_body(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/students/{id}"),
            &json!({ "lastName": "Omondi" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["firstName"], "Amina");
    assert_eq!(json["data"]["lastName"], "Omondi");
}

#[tokio::test]
async fn replace_selections_wholesale() {
    let (app, state) = make_test_app().await;
    let (l1, l2) = seed_lecturers(state.db()).await;

    let payload = json!({
        "firstName": "Brian",
        "lastName": "Kip",
        "email": "brian@university.ac",
        "schoolId": "S-2001",
        "selections": [{ "lecturerId": l1.id }]
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/students", &payload))
        .await
        .unwrap();
    let created = get_json_body(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/students/{id}/selections"),
            &json!({ "selections": [{ "lecturerId": l2.id, "marks": 55.0 }] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let selections = json["data"]["selections"].as_array().unwrap();
    assert_eq!(selections.len(), 1);
    assert_eq!(selections[0]["lecturer"]["name"], "Dr. Njeri");

    // Unknown student id is a 404, not an implicit create.
    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/students/999/selections",
            &json!({ "selections": [] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_marks_for_one_selection() {
    let (app, state) = make_test_app().await;
    let (l1, l2) = seed_lecturers(state.db()).await;

    let payload = json!({
        "firstName": "Carol",
        "lastName": "Atieno",
        "email": "carol@university.ac",
        "schoolId": "S-3001",
        "selections": [{ "lecturerId": l1.id }]
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/students", &payload))
        .await
        .unwrap();
    let created = get_json_body(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/students/{id}/lecturer/{}/marks", l1.id),
            &json!({ "marks": 88.5 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let selections = json["data"]["selections"].as_array().unwrap();
    assert_eq!(selections[0]["marks"], 88.5);

    // No selection under that lecturer.
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/students/{id}/lecturer/{}/marks", l2.id),
            &json!({ "marks": 40.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Selection not found");
}

#[tokio::test]
async fn delete_student_keeps_their_issues_with_dangling_reference() {
    let (app, state) = make_test_app().await;
    let (l1, _l2) = seed_lecturers(state.db()).await;

    let payload = json!({
        "firstName": "Dan",
        "lastName": "Mutua",
        "email": "dan@university.ac",
        "schoolId": "S-4001",
        "selections": [{ "lecturerId": l1.id }]
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/students", &payload))
        .await
        .unwrap();
    let created = get_json_body(response).await;
    let student_id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/issues",
            &json!({
                "studentId": student_id,
                "lecturerId": l1.id,
                "subject": "Missing CAT 2 marks",
                "description": "CAT 2 marks not on the portal"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let issue = get_json_body(response).await;
    let issue_id = issue["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/students/{student_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The issue survives; its student reference now expands to null.
    let response = app
        .oneshot(empty_request("GET", &format!("/api/issues/{issue_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert!(json["data"]["student"].is_null());
    assert_eq!(json["data"]["lecturer"]["name"], "Dr. Mwangi");
}
