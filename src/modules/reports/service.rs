use crate::modules::reports::model::{
    AttendanceSummaryReport, ExamPerformanceReport, HousePointsReport,
};
use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use rollbook_models::ids::ExamId;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct MonthQuery {
    year: i32,
    month: u32,
}

#[derive(Debug, Serialize)]
struct ExamQuery {
    exam_id: ExamId,
}

#[derive(Debug, Serialize)]
struct YearQuery {
    year: i32,
}

pub struct ReportService;

impl ReportService {
    #[instrument(skip(api))]
    pub async fn attendance_summary(
        api: &ApiClient,
        year: i32,
        month: u32,
    ) -> Result<AttendanceSummaryReport, AppError> {
        api.get_with_query("/reports/attendance/summary", &MonthQuery { year, month })
            .await
    }

    #[instrument(skip(api))]
    pub async fn exam_performance(
        api: &ApiClient,
        exam_id: ExamId,
    ) -> Result<ExamPerformanceReport, AppError> {
        api.get_with_query("/reports/exams/performance", &ExamQuery { exam_id })
            .await
    }

    #[instrument(skip(api))]
    pub async fn house_points(api: &ApiClient, year: i32) -> Result<HousePointsReport, AppError> {
        api.get_with_query("/reports/competitions/house-points", &YearQuery { year })
            .await
    }
}
