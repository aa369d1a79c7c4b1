use crate::modules::competitions::model::{
    Competition, CompetitionResult, CreateCompetitionDto, RecordResultDto, UpdateCompetitionDto,
};
use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use rollbook_models::ids::CompetitionId;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
}

pub struct CompetitionService;

impl CompetitionService {
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient, year: Option<i32>) -> Result<Vec<Competition>, AppError> {
        api.get_with_query("/competitions", &ListQuery { year }).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(
        api: &ApiClient,
        dto: &CreateCompetitionDto,
    ) -> Result<Competition, AppError> {
        api.post("/competitions", dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: CompetitionId,
        dto: &UpdateCompetitionDto,
    ) -> Result<Competition, AppError> {
        api.put(&format!("/competitions/{}", id), dto).await
    }

    #[instrument(skip(api))]
    pub async fn delete(api: &ApiClient, id: CompetitionId) -> Result<(), AppError> {
        api.delete(&format!("/competitions/{}", id)).await
    }

    #[instrument(skip(api, dto))]
    pub async fn record_result(
        api: &ApiClient,
        id: CompetitionId,
        dto: &RecordResultDto,
    ) -> Result<CompetitionResult, AppError> {
        api.post(&format!("/competitions/{}/results", id), dto).await
    }

    #[instrument(skip(api))]
    pub async fn results(
        api: &ApiClient,
        id: CompetitionId,
    ) -> Result<Vec<CompetitionResult>, AppError> {
        api.get(&format!("/competitions/{}/results", id)).await
    }
}
