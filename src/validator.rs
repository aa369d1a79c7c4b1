use rollbook_core::errors::AppError;
use validator::{Validate, ValidationErrors};

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .or_else(|| Some(format!("{} is invalid", field)))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs a DTO's validation schema, turning failures into the per-field
/// message string the operator sees.
pub fn validate_dto<T>(dto: &T) -> Result<(), AppError>
where
    T: Validate,
{
    dto.validate()
        .map_err(|errors| AppError::validation(format_errors(&errors)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook_core::errors::ErrorKind;
    use rollbook_models::grades::CreateGradeDto;

    #[test]
    fn invalid_dto_maps_to_validation_error() {
        let dto = CreateGradeDto {
            name_en: String::new(),
            name_si: String::new(),
            ordinal: 0,
        };
        let err = validate_dto(&dto).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.user_message().contains("invalid"));
    }

    #[test]
    fn valid_dto_passes() {
        let dto = CreateGradeDto {
            name_en: "Grade 1".to_string(),
            name_si: "1 ශ්‍රේණිය".to_string(),
            ordinal: 1,
        };
        assert!(validate_dto(&dto).is_ok());
    }
}
