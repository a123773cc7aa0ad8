//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::login::Login;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user
    ///
    /// Must fail with `AuthError::UserExists` when the login is taken, even
    /// if a concurrent registration slipped past `exists_by_login`.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by login (exact match)
    async fn find_by_login(&self, login: &str) -> AuthResult<Option<User>>;

    /// Check if login exists
    async fn exists_by_login(&self, login: &Login) -> AuthResult<bool>;
}
