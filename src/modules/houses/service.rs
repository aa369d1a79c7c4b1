use crate::modules::houses::model::{CreateHouseDto, House, UpdateHouseDto};
use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use rollbook_models::ids::HouseId;
use tracing::instrument;

pub struct HouseService;

impl HouseService {
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient) -> Result<Vec<House>, AppError> {
        api.get("/houses").await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateHouseDto) -> Result<House, AppError> {
        api.post("/houses", dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: HouseId,
        dto: &UpdateHouseDto,
    ) -> Result<House, AppError> {
        api.put(&format!("/houses/{}", id), dto).await
    }

    #[instrument(skip(api))]
    pub async fn delete(api: &ApiClient, id: HouseId) -> Result<(), AppError> {
        api.delete(&format!("/houses/{}", id)).await
    }
}
