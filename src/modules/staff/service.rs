use crate::modules::staff::model::{
    CreateStaffRoleDto, CreateTeacherDto, SetMicDto, StaffRole, Teacher, UpdateStaffRoleDto,
    UpdateTeacherDto,
};
use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use rollbook_models::ids::{StaffRoleId, TeacherId};
use tracing::instrument;

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient) -> Result<Vec<Teacher>, AppError> {
        api.get("/teachers").await
    }

    #[instrument(skip(api))]
    pub async fn get(api: &ApiClient, id: TeacherId) -> Result<Teacher, AppError> {
        api.get(&format!("/teachers/{}", id)).await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateTeacherDto) -> Result<Teacher, AppError> {
        api.post("/teachers", dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: TeacherId,
        dto: &UpdateTeacherDto,
    ) -> Result<Teacher, AppError> {
        api.put(&format!("/teachers/{}", id), dto).await
    }

    #[instrument(skip(api))]
    pub async fn delete(api: &ApiClient, id: TeacherId) -> Result<(), AppError> {
        api.delete(&format!("/teachers/{}", id)).await
    }

    /// Sets or clears the club the teacher is master-in-charge of.
    #[instrument(skip(api, dto))]
    pub async fn set_mic(
        api: &ApiClient,
        id: TeacherId,
        dto: &SetMicDto,
    ) -> Result<Teacher, AppError> {
        api.put(&format!("/teachers/{}/mic", id), dto).await
    }
}

pub struct StaffRoleService;

impl StaffRoleService {
    #[instrument(skip(api))]
    pub async fn list(api: &ApiClient) -> Result<Vec<StaffRole>, AppError> {
        api.get("/staff-roles").await
    }

    #[instrument(skip(api, dto))]
    pub async fn create(api: &ApiClient, dto: &CreateStaffRoleDto) -> Result<StaffRole, AppError> {
        api.post("/staff-roles", dto).await
    }

    #[instrument(skip(api, dto))]
    pub async fn update(
        api: &ApiClient,
        id: StaffRoleId,
        dto: &UpdateStaffRoleDto,
    ) -> Result<StaffRole, AppError> {
        api.put(&format!("/staff-roles/{}", id), dto).await
    }

    #[instrument(skip(api))]
    pub async fn delete(api: &ApiClient, id: StaffRoleId) -> Result<(), AppError> {
        api.delete(&format!("/staff-roles/{}", id)).await
    }
}
