use std::fmt;

use crate::core::wheel::{MAX_PARTNER_COUNT, MIN_PARTNER_COUNT};
use crate::models::Rider;

/// Single invalid field in a rider row
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    /// Zero-based row index in the submitted rider list
    pub row: usize,
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}: {}", self.row, self.field, self.message)
    }
}

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// One or more rider rows failed validation; all problems are collected
    InvalidRiders(Vec<RowError>),
    /// Invalid request data
    ValidationError(String),
    /// Rating requested for an empty field
    EmptyField,
    /// Configuration file problem
    ConfigError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidRiders(errors) => {
                let joined = errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "Invalid rider rows: {}", joined)
            }
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::EmptyField => write!(f, "Validation error: rider list is empty"),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "api")]
mod api {
    use actix_web::{http::StatusCode, HttpResponse, ResponseError};

    use super::AppError;
    use crate::models::ErrorResponse;

    impl ResponseError for AppError {
        fn status_code(&self) -> StatusCode {
            match self {
                AppError::InvalidRiders(_)
                | AppError::ValidationError(_)
                | AppError::EmptyField => StatusCode::BAD_REQUEST,
                AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }

        fn error_response(&self) -> HttpResponse {
            let error_code = match self {
                AppError::InvalidRiders(_) => "invalid_riders",
                AppError::ValidationError(_) => "validation_error",
                AppError::EmptyField => "empty_field",
                AppError::ConfigError(_) => "config_error",
            };

            HttpResponse::build(self.status_code()).json(ErrorResponse {
                error: error_code.to_string(),
                message: self.to_string(),
            })
        }
    }
}

/// Validation functions
///
/// Collects every problem in the list instead of stopping at the first,
/// so the caller can report all bad rows at once.
pub fn validate_riders(riders: &[Rider]) -> Result<(), AppError> {
    if riders.is_empty() {
        return Err(AppError::EmptyField);
    }

    let mut errors = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for (row, rider) in riders.iter().enumerate() {
        if rider.no == 0 {
            errors.push(RowError {
                row,
                field: "no",
                message: "rider number must be positive".to_string(),
            });
        } else if !seen.insert(rider.no) {
            errors.push(RowError {
                row,
                field: "no",
                message: format!("duplicate rider number {}", rider.no),
            });
        }
        if rider.avg_st <= 0.0 {
            errors.push(RowError {
                row,
                field: "avg_st",
                message: format!("must be positive, got {}", rider.avg_st),
            });
        }
        if rider.avg_race_time <= 0.0 {
            errors.push(RowError {
                row,
                field: "avg_race_time",
                message: format!("must be positive, got {}", rider.avg_race_time),
            });
        }
        for (field, rate) in [
            ("recent_in2_rate", rider.recent_in2_rate),
            ("dry_in2_rate", rider.dry_in2_rate),
            ("wet_in2_rate", rider.wet_in2_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                errors.push(RowError {
                    row,
                    field,
                    message: format!("must be between 0 and 1, got {}", rate),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::InvalidRiders(errors))
    }
}

pub fn validate_partner_count(count: usize) -> Result<(), AppError> {
    if !(MIN_PARTNER_COUNT..=MAX_PARTNER_COUNT).contains(&count) {
        return Err(AppError::ValidationError(format!(
            "Partner count must be between {} and {}, got {}",
            MIN_PARTNER_COUNT, MAX_PARTNER_COUNT, count
        )));
    }
    Ok(())
}
