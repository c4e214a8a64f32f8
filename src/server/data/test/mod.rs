mod lab_responsibility;
mod notification;
mod reward;
mod schedule;
mod task;
mod user;
mod weekly_hours;
