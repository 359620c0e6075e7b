use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{User, is_reserved_username, registration_role};
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, LoginResponse, RegisterRequestDto, RegisterResponse};

pub struct AuthService;

impl AuthService {
    /// Registers a new account.
    ///
    /// Reserved usernames are rejected before any persistence check;
    /// duplicate usernames are a conflict. The duplicate check is
    /// backed by a unique index, so a racing second insert still
    /// surfaces as a conflict rather than a second account.
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn register(
        db: &PgPool,
        dto: RegisterRequestDto,
    ) -> Result<RegisterResponse, AppError> {
        if is_reserved_username(&dto.username) {
            return Err(AppError::forbidden(format!(
                "Username '{}' is reserved",
                dto.username
            )));
        }

        let role = registration_role(dto.desired_role.as_deref())?;

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE LOWER(username) = LOWER($1)",
        )
        .bind(&dto.username)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        if existing > 0 {
            return Err(AppError::conflict("Username already exists"));
        }

        let password_hash = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, name, password_hash, email, role)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(&dto.username)
        .bind(&dto.name)
        .bind(&password_hash)
        .bind(&dto.email)
        .bind(role)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                AppError::conflict("Username already exists")
            } else {
                AppError::database(e)
            }
        })?;

        tracing::info!(user_id = %user.id, role = %user.role, "user registered");

        Ok(RegisterResponse {
            success: true,
            id: user.id,
            username: user.username,
            role: user.role,
            role_pending: user.role.is_pending().then_some(user.role),
        })
    }

    #[instrument(skip(db, dto, jwt_config), fields(username = %dto.username))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(&dto.username)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

        let is_valid = verify_password(&dto.password, &user.password_hash)?;
        if !is_valid {
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        let access_token = create_access_token(user.id, &user.username, user.role, jwt_config)?;

        Ok(LoginResponse {
            success: true,
            access_token,
            id: user.id,
            username: user.username,
            name: user.name,
            role: user.role,
        })
    }
}
