//! Registration and login.
//!
//! Passwords are hashed with argon2id into PHC strings. The setup code is the only
//! way to create an approved account without an approver.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        access::{AccountStatus, Role},
        user::{CreateUserParam, User},
    },
    service::setup_code::SetupCodeService,
};

const MIN_PASSWORD_LENGTH: usize = 8;

/// Hash a plaintext password with argon2id.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()).into())
}

/// Verify a plaintext password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Trims and lower-cases an e-mail, rejecting values without `@`.
pub fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(AppError::BadRequest("A valid e-mail is required".to_string()));
    }
    Ok(email)
}

/// Registration input after DTO conversion.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    pub name: String,
    pub password: String,
    pub setup_code: Option<String>,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    setup_code_service: &'a SetupCodeService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, setup_code_service: &'a SetupCodeService) -> Self {
        Self {
            db,
            setup_code_service,
        }
    }

    /// Registers a new account.
    ///
    /// New accounts are pending volunteers. A valid setup code instead creates an
    /// approved admin and consumes the code.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Invalid e-mail, blank name, short password or bad setup code
    /// - `Err(AppError::Conflict)` - E-mail already registered
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let email = normalize_email(&params.email)?;
        let name = crate::server::model::require_text("name", params.name)?;
        if params.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("E-mail is already registered".to_string()));
        }

        let (role, status) = match params.setup_code.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => {
                if !self.setup_code_service.validate_and_consume(code).await {
                    return Err(AppError::BadRequest(
                        "Invalid or expired setup code".to_string(),
                    ));
                }
                (Role::Admin, AccountStatus::Approved)
            }
            _ => (Role::Volunteer, AccountStatus::Pending),
        };

        let user = user_repo
            .create(CreateUserParam {
                email,
                name,
                password_hash: hash_password(&params.password)?,
                role,
                status,
            })
            .await
            .map_err(|err| AppError::conflict_on_unique(err, "E-mail is already registered"))?;

        tracing::info!(
            "Registered user {} ({}) as {} {}",
            user.id,
            user.email,
            user.status,
            user.role
        );

        Ok(user)
    }

    /// Verifies credentials and account state.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid and the account is approved
    /// - `Err(AuthError::InvalidCredentials)` - Unknown e-mail or wrong password
    /// - `Err(AuthError::AccountPending)` / `Err(AuthError::AccountRejected)` - Not approved
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();
        let user_repo = UserRepository::new(self.db);

        let Some((user, hash)) = user_repo.find_credentials(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        match user.status {
            AccountStatus::Approved => Ok(user),
            AccountStatus::Pending => Err(AuthError::AccountPending.into()),
            AccountStatus::Rejected => Err(AuthError::AccountRejected.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_and_verifies() {
        let hash = hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn normalizes_email() {
        assert_eq!(normalize_email("  Ada@Lab.Test ").unwrap(), "ada@lab.test");
        assert!(normalize_email("no-at-sign").is_err());
        assert!(normalize_email("@lab.test").is_err());
    }
}
