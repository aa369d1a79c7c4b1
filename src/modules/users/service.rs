use crate::modules::users::model::{AppUser, AssignRolesDto, CreateUserDto, UpdateUserDto};
use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use rollbook_core::pagination::{PageQuery, Paginated};
use rollbook_models::ids::UserId;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i64>,
}

pub struct UserService;

impl UserService {
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient, query: PageQuery) -> Result<Paginated<AppUser>, AppError> {
        let params = ListQuery {
            page: query.page,
            limit: query.limit,
        };
        api.get_with_query("/users", &params).await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: UserId) -> Result<AppUser, AppError> {
        api.get(&format!("/users/{}", id)).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateUserDto) -> Result<AppUser, AppError> {
        api.post("/users", dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: UserId,
        dto: &UpdateUserDto,
    ) -> Result<AppUser, AppError> {
        api.put(&format!("/users/{}", id), dto).await
    }

    #[instrument(skip(api))]
    pub async fn delete(api: &ApiClient, id: UserId) -> Result<(), AppError> {
        api.delete(&format!("/users/{}", id)).await
    }

    #[instrument(skip(api, dto))]
    pub async fn assign_roles(
        api: &ApiClient,
        id: UserId,
        dto: &AssignRolesDto,
    ) -> Result<AppUser, AppError> {
        api.put(&format!("/users/{}/roles", id), dto).await
    }
}
