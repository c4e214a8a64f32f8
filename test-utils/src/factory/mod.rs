//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*`
//! convenience function for quick default creation. Factories never create
//! parent rows implicitly; use `helpers` when a whole chain is needed.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let manager = factory::user::UserFactory::new(&db).role("manager").build().await?;
//! let project = factory::create_project(&db, manager.id).await?;
//! let task = factory::task::TaskFactory::new(&db, project.id)
//!     .assignee(manager.id)
//!     .points(10)
//!     .build()
//!     .await?;
//! ```

pub mod badge;
pub mod helpers;
pub mod issue;
pub mod lab_responsibility;
pub mod notification;
pub mod project;
pub mod reward;
pub mod schedule;
pub mod task;
pub mod user;
pub mod weekly_report;
pub mod work_session;

pub use badge::create_badge;
pub use issue::create_issue;
pub use lab_responsibility::create_lab_responsibility;
pub use notification::create_notification;
pub use project::create_project;
pub use reward::create_reward;
pub use schedule::create_schedule;
pub use task::create_task;
pub use user::{create_admin, create_user};
pub use weekly_report::create_weekly_report;
pub use work_session::create_work_session;
