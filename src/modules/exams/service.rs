use crate::modules::exams::model::{CreateExamDto, Exam, ExamResult, UpdateExamDto};
use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use rollbook_models::ids::ExamId;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
}

pub struct ExamService;

impl ExamService {
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient, year: Option<i32>) -> Result<Vec<Exam>, AppError> {
        api.get_with_query("/exams", &ListQuery { year }).await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: ExamId) -> Result<Exam, AppError> {
        api.get(&format!("/exams/{}", id)).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateExamDto) -> Result<Exam, AppError> {
        api.post("/exams", dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(api: &ApiClient, id: ExamId, dto: &UpdateExamDto) -> Result<Exam, AppError> {
        api.put(&format!("/exams/{}", id), dto).await
    }

    #[instrument(skip(api))]
    pub async fn delete(api: &ApiClient, id: ExamId) -> Result<(), AppError> {
        api.delete(&format!("/exams/{}", id)).await
    }

    #[instrument(skip(api))]
    pub async fn results(api: &ApiClient, id: ExamId) -> Result<Vec<ExamResult>, AppError> {
        api.get(&format!("/exams/{}/results", id)).await
    }
}
