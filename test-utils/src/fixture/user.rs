//! User fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::user;

/// Default test user e-mail.
pub const DEFAULT_EMAIL: &str = "user@lab.test";

/// Default test user name.
pub const DEFAULT_NAME: &str = "Test User";

/// Placeholder stored in `password_hash` for users that never log in.
pub const DEFAULT_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$fixture$fixture";

/// Creates an approved volunteer entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - email: `"user@lab.test"`
/// - role: `"volunteer"`, status: `"approved"`
/// - points: `0`, weekly_seconds: `0`
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a builder for a user entity model with custom values.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for in-memory user entity models.
pub struct UserEntityBuilder {
    model: user::Model,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        let created = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
        Self {
            model: user::Model {
                id: 1,
                email: DEFAULT_EMAIL.to_string(),
                name: DEFAULT_NAME.to_string(),
                password_hash: DEFAULT_PASSWORD_HASH.to_string(),
                role: "volunteer".to_string(),
                status: "approved".to_string(),
                points: 0,
                weekly_seconds: 0,
                created_at: created,
                updated_at: created,
            },
        }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.model.email = email.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.model.role = role.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.model.status = status.into();
        self
    }

    pub fn points(mut self, points: i32) -> Self {
        self.model.points = points;
        self
    }

    pub fn build(self) -> user::Model {
        self.model
    }
}
