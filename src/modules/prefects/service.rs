use crate::modules::prefects::model::{AppointPrefectDto, Prefect, UpdatePrefectDto};
use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use rollbook_models::ids::PrefectId;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
}

pub struct PrefectService;

impl PrefectService {
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient, year: Option<i32>) -> Result<Vec<Prefect>, AppError> {
        api.get_with_query("/prefects", &ListQuery { year }).await
    }

    #[instrument(skip(api, dto))]
    pub async fn appoint(api: &ApiClient, dto: &AppointPrefectDto) -> Result<Prefect, AppError> {
        api.post("/prefects", dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: PrefectId,
        dto: &UpdatePrefectDto,
    ) -> Result<Prefect, AppError> {
        api.put(&format!("/prefects/{}", id), dto).await
    }

    #[instrument(skip(api))]
    pub async fn remove(api: &ApiClient, id: PrefectId) -> Result<(), AppError> {
        api.delete(&format!("/prefects/{}", id)).await
    }
}
