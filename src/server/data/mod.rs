//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so a service can run several of them
//! inside one `DatabaseTransaction`.

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

#[cfg(test)]
mod test;

use sea_orm::sea_query::{Expr, ExprTrait, IntoColumnRef};

/// `column + delta`, evaluated by the database.
pub(crate) fn column_plus<T, V>(column: T, delta: V) -> Expr
where
    T: IntoColumnRef,
    V: Into<Expr>,
{
    ExprTrait::add(Expr::col(column), delta)
}

/// `column - delta`, evaluated by the database.
pub(crate) fn column_minus<T, V>(column: T, delta: V) -> Expr
where
    T: IntoColumnRef,
    V: Into<Expr>,
{
    ExprTrait::sub(Expr::col(column), delta)
}
