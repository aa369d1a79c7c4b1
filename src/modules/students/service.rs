use crate::modules::students::model::{
    AssignHouseDto, CreateStudentDto, Student, UpdateStudentDto,
};
use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use rollbook_core::pagination::{PageQuery, Paginated};
use rollbook_models::ids::{GradeId, StudentId};
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grade_id: Option<GradeId>,
}

pub struct StudentService;

impl StudentService {
    #[instrument(skip(api))]
    pub async fn list(
        api: &ApiClient,
        query: PageQuery,
        grade_id: Option<GradeId>,
    ) -> Result<Paginated<Student>, AppError> {
        let params = ListQuery {
            page: query.page,
            limit: query.limit,
            grade_id,
        };
        api.get_with_query("/students", &params).await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: StudentId) -> Result<Student, AppError> {
        api.get(&format!("/students/{}", id)).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateStudentDto) -> Result<Student, AppError> {
        api.post("/students", dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: StudentId,
        dto: &UpdateStudentDto,
    ) -> Result<Student, AppError> {
        api.put(&format!("/students/{}", id), dto).await
    }

    #[instrument(skip(api))]
    pub async fn delete(api: &ApiClient, id: StudentId) -> Result<(), AppError> {
        api.delete(&format!("/students/{}", id)).await
    }

    #[instrument(skip(api, dto))]
    pub async fn assign_house(
        api: &ApiClient,
        id: StudentId,
        dto: &AssignHouseDto,
    ) -> Result<Student, AppError> {
        api.put(&format!("/students/{}/house", id), dto).await
    }
}
