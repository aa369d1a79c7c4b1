//! In-process stub backend for integration tests.
//!
//! The real backend is an external collaborator; these tests stand up a
//! minimal in-memory imitation of its contract (REST resources, paginated
//! envelopes, `{"error": ...}` failure bodies, create-if-absent attendance)
//! and drive the real client and service layer against it.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rollbook_api::ApiClient;
use rollbook_config::{ApiConfig, SessionConfig};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct StubState {
    pub students: Arc<Mutex<Vec<Value>>>,
    pub attendance: Arc<Mutex<Vec<Value>>>,
}

pub async fn spawn_backend() -> (String, StubState) {
    let state = StubState::default();
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

pub fn client_for(base_url: &str) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    };
    let session = SessionConfig {
        token: Some("test-token".to_string()),
    };
    ApiClient::new(&config, &session).unwrap()
}

fn router(state: StubState) -> Router {
    Router::new()
        .route("/students", post(create_student).get(list_students))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/attendance", post(mark_attendance).get(list_attendance))
        .route("/reports/attendance/summary", get(attendance_summary))
        .route("/reports/exams/performance", get(exam_performance))
        .route("/reports/competitions/house-points", get(house_points))
        .route("/boom", get(boom))
        .with_state(state)
}

fn not_found(resource: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": format!("{} not found", resource)})),
    )
        .into_response()
}

async fn create_student(
    State(state): State<StubState>,
    Json(dto): Json<Value>,
) -> Response {
    let mut students = state.students.lock().unwrap();

    let admission_no = dto["admission_no"].as_str().unwrap_or_default().to_string();
    if students
        .iter()
        .any(|s| s["admission_no"].as_str() == Some(admission_no.as_str()))
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("Student with admission number {} already exists", admission_no)
            })),
        )
            .into_response();
    }

    let mut student = dto.clone();
    student["id"] = json!(Uuid::new_v4());
    // The backend denormalizes nothing on create; references come back as
    // bare IDs.
    if let Some(grade_id) = dto.get("grade_id") {
        student["grade"] = grade_id.clone();
    }
    if let Some(house_id) = dto.get("house_id") {
        student["house"] = house_id.clone();
    }

    students.push(student.clone());
    Json(student).into_response()
}

async fn list_students(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let students = state.students.lock().unwrap();

    let limit: usize = params
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);
    let page: usize = params
        .get("page")
        .and_then(|v| v.parse().ok())
        .unwrap_or(1);

    let visible: Vec<Value> = students
        .iter()
        .filter(|s| match params.get("grade_id") {
            Some(grade_id) => s["grade"].as_str() == Some(grade_id.as_str()),
            None => true,
        })
        .cloned()
        .collect();

    let total = visible.len();
    let data: Vec<Value> = visible
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();

    Json(json!({
        "data": data,
        "meta": {
            "page": page as i64,
            "limit": limit as i64,
            "total": total as i64,
            "total_pages": total.div_ceil(limit) as i64,
        }
    }))
    .into_response()
}

async fn get_student(State(state): State<StubState>, Path(id): Path<Uuid>) -> Response {
    let students = state.students.lock().unwrap();
    match students
        .iter()
        .find(|s| s["id"].as_str() == Some(id.to_string().as_str()))
    {
        Some(student) => Json(student.clone()).into_response(),
        None => not_found("Student"),
    }
}

async fn update_student(
    State(state): State<StubState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<Value>,
) -> Response {
    let mut students = state.students.lock().unwrap();
    let Some(student) = students
        .iter_mut()
        .find(|s| s["id"].as_str() == Some(id.to_string().as_str()))
    else {
        return not_found("Student");
    };

    if let Some(fields) = dto.as_object() {
        for (key, value) in fields {
            student[key] = value.clone();
        }
    }
    Json(student.clone()).into_response()
}

async fn delete_student(State(state): State<StubState>, Path(id): Path<Uuid>) -> Response {
    let mut students = state.students.lock().unwrap();
    let before = students.len();
    students.retain(|s| s["id"].as_str() != Some(id.to_string().as_str()));

    if students.len() == before {
        return not_found("Student");
    }
    Json(json!({"message": "Student deleted successfully"})).into_response()
}

async fn mark_attendance(
    State(state): State<StubState>,
    Json(dto): Json<Value>,
) -> Response {
    let mut attendance = state.attendance.lock().unwrap();

    let date = dto["date"].clone();
    let mut marked = 0;
    let mut skipped = 0;

    for student_id in dto["student_ids"].as_array().cloned().unwrap_or_default() {
        let exists = attendance
            .iter()
            .any(|r| r["student"] == student_id && r["date"] == date);
        if exists {
            skipped += 1;
            continue;
        }
        attendance.push(json!({
            "id": Uuid::new_v4(),
            "student": student_id,
            "date": date,
            "status": "present",
        }));
        marked += 1;
    }

    Json(json!({"marked": marked, "skipped": skipped})).into_response()
}

async fn list_attendance(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let attendance = state.attendance.lock().unwrap();

    let records: Vec<Value> = attendance
        .iter()
        .filter(|r| {
            let date = r["date"].as_str().unwrap_or_default();
            let after_from = params.get("from").is_none_or(|f| date >= f.as_str());
            let before_to = params.get("to").is_none_or(|t| date <= t.as_str());
            let exact = params.get("date").is_none_or(|d| date == d.as_str());
            after_from && before_to && exact
        })
        .cloned()
        .collect();

    Json(records).into_response()
}

async fn attendance_summary(Query(params): Query<HashMap<String, String>>) -> Response {
    let year: i64 = params
        .get("year")
        .and_then(|v| v.parse().ok())
        .unwrap_or(2024);
    let month: i64 = params
        .get("month")
        .and_then(|v| v.parse().ok())
        .unwrap_or(6);

    Json(json!({
        "year": year,
        "month": month,
        "grades": [{
            "grade": {
                "id": "4fd1a9f2-16cb-4d4e-90a5-06a94cf0f3b7",
                "name_en": "Grade 5",
                "name_si": "5 ශ්‍රේණිය",
                "ordinal": 5
            },
            "total_students": 25,
            "sundays": [
                {"date": "2024-06-02", "present": 21},
                {"date": "2024-06-09", "present": 23}
            ]
        }]
    }))
    .into_response()
}

async fn exam_performance(Query(params): Query<HashMap<String, String>>) -> Response {
    let exam_id = params
        .get("exam_id")
        .cloned()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Json(json!({
        "exam": exam_id,
        "rows": [
            {"student": Uuid::new_v4(), "percentage": 82.5},
            {"student": Uuid::new_v4(), "percentage": 55.0}
        ]
    }))
    .into_response()
}

async fn house_points(Query(params): Query<HashMap<String, String>>) -> Response {
    let year: i64 = params
        .get("year")
        .and_then(|v| v.parse().ok())
        .unwrap_or(2024);

    Json(json!({
        "year": year,
        "houses": [
            {"house": Uuid::new_v4(), "points": 45},
            {
                "house": {
                    "id": Uuid::new_v4(),
                    "name_en": "Gemunu",
                    "name_si": "ගැමුණු",
                    "color": "red"
                },
                "points": 61
            }
        ]
    }))
    .into_response()
}

async fn boom() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>").into_response()
}
