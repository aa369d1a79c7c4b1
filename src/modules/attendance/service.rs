use crate::modules::attendance::model::{
    Attendance, AttendanceFilter, MarkAttendanceDto, MarkOutcome,
};
use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use tracing::instrument;

pub struct AttendanceService;

impl AttendanceService {
    #[instrument(skip(api))]
    pub async fn list(
        api: &ApiClient,
        filter: &AttendanceFilter,
    ) -> Result<Vec<Attendance>, AppError> {
        api.get_with_query("/attendance", filter).await
    }

    /// Submits the students present on a date. The backend creates one
    /// record per student per date and leaves existing records untouched.
    #[instrument(skip(api, dto))]
    pub async fn mark(api: &ApiClient, dto: &MarkAttendanceDto) -> Result<MarkOutcome, AppError> {
        api.post("/attendance", dto).await
    }
}
