use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are generated from SeaORM entities using the SQLite backend and created
/// in the order they were added, so referenced tables must come before the tables
/// holding foreign keys to them.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Project, Task};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Project)
///     .with_table(Task)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for project and task tests.
    ///
    /// Adds `User`, `Project`, `Task` and `Notification` (task completion notifies
    /// the assignee).
    pub fn with_task_tables(self) -> Self {
        self.with_table(User)
            .with_table(Project)
            .with_table(Task)
            .with_table(Notification)
    }

    /// Adds the tables needed for work session and weekly hours tests.
    pub fn with_work_tables(self) -> Self {
        self.with_task_tables()
            .with_table(WorkSession)
            .with_table(WeeklyHours)
    }

    /// Adds the tables needed for rewards and purchases.
    pub fn with_reward_tables(self) -> Self {
        self.with_table(User)
            .with_table(Notification)
            .with_table(Reward)
            .with_table(Purchase)
    }

    /// Adds every application table in dependency order.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new().with_all_tables().build().await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_work_tables()
            .with_table(WeeklyReport)
            .with_table(Reward)
            .with_table(Purchase)
            .with_table(Schedule)
            .with_table(LabResponsibility)
            .with_table(Badge)
            .with_table(UserBadge)
            .with_table(Issue)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
