//! Interactive input helpers. Flags always win; prompts only fill gaps.

use dialoguer::{Confirm, Input};
use rollbook_core::errors::AppError;

/// Returns the flag value when given, otherwise prompts for it.
pub fn text_or_prompt(value: Option<String>, prompt: &str) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v),
        None => Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(AppError::internal),
    }
}

/// Optional free-text field: the flag when given, otherwise a prompt that
/// accepts an empty answer.
pub fn optional_text_or_prompt(
    value: Option<String>,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    if value.is_some() {
        return Ok(value);
    }
    let answer: String = Input::new()
        .with_prompt(format!("{} (blank to skip)", prompt))
        .allow_empty(true)
        .interact_text()
        .map_err(AppError::internal)?;
    Ok(Some(answer.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Asks before a destructive action unless `--yes` was passed. A declined
/// confirmation aborts the command without touching the backend.
pub fn confirm_destructive(prompt: &str, assume_yes: bool) -> Result<bool, AppError> {
    if assume_yes {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(AppError::internal)
}
