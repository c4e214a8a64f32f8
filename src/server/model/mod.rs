//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Status columns are plain strings in the database and enums here.

/// Declares a fieldless enum stored as a lowercase string.
///
/// Generates `ALL`, `as_str`, `Display` and `FromStr`.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!("Unknown {} '{}'", stringify!($name), other)),
                }
            }
        }
    };
}

pub mod access;
pub mod badge;
pub mod issue;
pub mod lab_responsibility;
pub mod notification;
pub mod project;
pub mod reward;
pub mod schedule;
pub mod task;
pub mod user;
pub mod weekly_hours;
pub mod weekly_report;
pub mod work_session;

use std::str::FromStr;

use crate::server::error::AppError;

/// Parses a client-supplied enum value, turning failures into 400 Bad Request.
pub fn parse_input<T: FromStr<Err = String>>(value: &str) -> Result<T, AppError> {
    value.trim().parse::<T>().map_err(AppError::BadRequest)
}

/// Trims a required text field, rejecting blank input.
pub fn require_text(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be blank", field)));
    }
    Ok(trimmed.to_string())
}

/// Total pages for `total` items split into pages of `per_page`.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}
