//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a project owned by them and a task assigned to them.
///
/// # Returns
/// - `Ok((user, project, task))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_task_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::project::Model,
        entity::task::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let project = crate::factory::project::create_project(db, user.id).await?;
    let task = crate::factory::task::TaskFactory::new(db, project.id)
        .assignee(user.id)
        .build()
        .await?;

    Ok((user, project, task))
}
