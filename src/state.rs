use rollbook_api::ApiClient;
use rollbook_config::{ApiConfig, SessionConfig};
use rollbook_core::errors::AppError;

#[derive(Clone, Debug)]
pub struct AppState {
    pub api: ApiClient,
}

pub fn init_app_state() -> Result<AppState, AppError> {
    let api = ApiClient::new(&ApiConfig::from_env(), &SessionConfig::from_env())?;
    Ok(AppState { api })
}
