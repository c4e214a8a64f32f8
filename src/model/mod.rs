//! JSON request and response bodies exposed by the HTTP API.

pub mod api;
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
