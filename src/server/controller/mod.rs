//! HTTP handlers.
//!
//! Each handler checks access through `AuthGuard`, converts the request DTO into
//! service parameters, calls one service and converts the result back into a DTO.

pub mod auth;
pub mod badge;
pub mod health;
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
