use crate::modules::sections::model::{CreateSectionDto, Section, UpdateSectionDto};
use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use rollbook_models::ids::SectionId;
use tracing::instrument;

pub struct SectionService;

impl SectionService {
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient) -> Result<Vec<Section>, AppError> {
        api.get("/sections").await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: SectionId) -> Result<Section, AppError> {
        api.get(&format!("/sections/{}", id)).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateSectionDto) -> Result<Section, AppError> {
        api.post("/sections", dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: SectionId,
        dto: &UpdateSectionDto,
    ) -> Result<Section, AppError> {
        api.put(&format!("/sections/{}", id), dto).await
    }

    #[instrument(skip(api))]
    pub async fn delete(api: &ApiClient, id: SectionId) -> Result<(), AppError> {
        api.delete(&format!("/sections/{}", id)).await
    }
}
