//! User registration, login and permission changes.

pub mod jwt;
pub mod password;

use entity::sea_orm_active_enums::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::usuario::UsuarioRepository,
    error::{auth::AuthError, AppError},
    model::usuario::{CreateUsuarioParams, RegisterUsuarioParams, Usuario},
    service::auth::{
        jwt::JwtConfig,
        password::{hash_password, verify_password},
    },
    util::id::uuid_id,
};

/// Token issued on a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// `Bearer <token>`.
    pub jwt: String,
    pub user_id: String,
}

/// Service for user accounts and bearer tokens.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtConfig,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `jwt` - Token signing configuration
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtConfig) -> Self {
        Self { db, jwt }
    }

    /// Registers a new user with a hashed password.
    ///
    /// # Returns
    /// - `Ok(Usuario)` - Created user
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError::InternalErr)` - Hashing failed
    pub async fn register(&self, params: RegisterUsuarioParams) -> Result<Usuario, AppError> {
        let repo = UsuarioRepository::new(self.db);

        if repo.email_exists(&params.email).await? {
            return Err(AppError::BadRequest("Usuário já existe.".to_string()));
        }

        let password_hash = hash_password(&params.password)?;

        let usuario = repo
            .create(
                uuid_id(),
                CreateUsuarioParams {
                    full_name: params.full_name,
                    email: params.email,
                    password_hash,
                    birth_date: params.birth_date,
                    tipo: params.tipo,
                },
            )
            .await?;

        tracing::info!("Usuário {} criado", usuario.id);

        Ok(usuario)
    }

    /// Checks credentials and signs a token.
    ///
    /// # Returns
    /// - `Ok(LoginResult)` - Credentials valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let email = email.trim().to_lowercase();

        let Some(usuario) = UsuarioRepository::new(self.db)
            .find_by_email(&email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &usuario.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.jwt.generate(&usuario.id, &usuario.email, usuario.tipo)?;

        Ok(LoginResult {
            jwt: format!("Bearer {}", token),
            user_id: usuario.id,
        })
    }

    /// Sets the role of a user. Callers check that the requester is an admin.
    ///
    /// # Returns
    /// - `Ok(Usuario)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn change_permission(
        &self,
        changed_by: &Usuario,
        user_id: &str,
        tipo: Role,
    ) -> Result<Usuario, AppError> {
        let usuario = UsuarioRepository::new(self.db)
            .set_tipo(user_id, tipo)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado.".to_string()))?;

        tracing::info!(
            "Permissões do usuário {} alteradas para {:?} por {}",
            usuario.id,
            tipo,
            changed_by.id
        );

        Ok(usuario)
    }
}
