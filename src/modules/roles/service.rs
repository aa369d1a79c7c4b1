use crate::modules::roles::model::{CreateRoleDto, Role, UpdateRoleDto};
use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use rollbook_models::ids::RoleId;
use tracing::instrument;

pub struct RoleService;

impl RoleService {
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient) -> Result<Vec<Role>, AppError> {
        api.get("/roles").await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: RoleId) -> Result<Role, AppError> {
        api.get(&format!("/roles/{}", id)).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateRoleDto) -> Result<Role, AppError> {
        api.post("/roles", dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(api: &ApiClient, id: RoleId, dto: &UpdateRoleDto) -> Result<Role, AppError> {
        api.put(&format!("/roles/{}", id), dto).await
    }

    #[instrument(skip(api))]
    pub async fn delete(api: &ApiClient, id: RoleId) -> Result<(), AppError> {
        api.delete(&format!("/roles/{}", id)).await
    }
}
