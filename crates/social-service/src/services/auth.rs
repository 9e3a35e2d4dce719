//! Authentication service
//!
//! Handles user registration, login, token refresh, and logout. Refresh
//! tokens are tracked by jti in the database; logout and rotation revoke
//! them there, so a blacklisted token is dead even before it expires.

use social_common::auth::{hash_password, validate_password_strength, verify_password};
use social_common::AppError;
use social_core::entities::User;
use social_core::traits::RefreshTokenRecord;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest, LogoutRequest, RefreshTokenRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Check if email already exists
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // Create the user; the repository creates the profile in the same
        // transaction, so the account never exists without one
        let user = User::new(self.ctx.generate_id(), request.email);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        self.issue_tokens(&user).await
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Find user by email
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_tokens(&user).await
    }

    /// Rotate tokens using a valid refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        // Validate the JWT itself
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh)
            .map_err(ServiceError::from)?;

        // The jti must still be live in the database
        let record = self
            .ctx
            .refresh_token_repo()
            .find_valid(&claims.jti)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        // Get user
        let user = self
            .ctx
            .user_repo()
            .find_by_id(record.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", record.user_id.to_string()))?;

        // Rotate: revoke the old token before issuing the new pair
        self.ctx.refresh_token_repo().revoke(&claims.jti).await?;

        info!(user_id = %user.id, "Tokens refreshed successfully");

        self.issue_tokens(&user).await
    }

    /// Logout by blacklisting the presented refresh token.
    /// A missing or unusable token is a client error (400), not an auth
    /// failure: the endpoint itself requires no access token.
    #[instrument(skip(self, request))]
    pub async fn logout(&self, request: LogoutRequest) -> ServiceResult<()> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh)
            .map_err(|_| ServiceError::validation("Invalid token"))?;

        let revoked = self.ctx.refresh_token_repo().revoke(&claims.jti).await?;
        if !revoked {
            // Unknown jti or already blacklisted
            return Err(ServiceError::validation("Invalid token"));
        }

        info!(user_id = %claims.sub, "User logged out successfully");
        Ok(())
    }

    /// Generate a token pair for the user and persist the refresh jti
    async fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        // Pull jti and expiry back out of the freshly minted refresh token
        let refresh_claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&token_pair.refresh_token)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let expires_at = refresh_claims.expires_at();
        let record = RefreshTokenRecord {
            jti: refresh_claims.jti,
            user_id: user.id,
            expires_at,
        };
        self.ctx.refresh_token_repo().store(&record).await?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(user),
        ))
    }
}
