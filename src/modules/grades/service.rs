use crate::modules::grades::model::{CreateGradeDto, Grade, UpdateGradeDto};
use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use rollbook_models::ids::GradeId;
use tracing::instrument;

pub struct GradeService;

impl GradeService {
    /// Grades are few; the backend returns the whole ladder unpaginated.
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient) -> Result<Vec<Grade>, AppError> {
        api.get("/grades").await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: GradeId) -> Result<Grade, AppError> {
        api.get(&format!("/grades/{}", id)).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateGradeDto) -> Result<Grade, AppError> {
        api.post("/grades", dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: GradeId,
        dto: &UpdateGradeDto,
    ) -> Result<Grade, AppError> {
        api.put(&format!("/grades/{}", id), dto).await
    }

    #[instrument(skip(api))]
    pub async fn delete(api: &ApiClient, id: GradeId) -> Result<(), AppError> {
        api.delete(&format!("/grades/{}", id)).await
    }
}
