//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod gate;
pub mod login;
pub mod register;

// Re-exports
pub use config::AuthConfig;
pub use gate::{AuthPolicy, GateOutcome, TokenState, evaluate, inspect_token};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
