//! # lsp-fixture-core
//!
//! A small user-record fixture for exercising editor language-server
//! integrations: completion, hover, diagnostics and inlay hints.
//!
//! ## Architecture
//!
//! - [`user`] - the validated [`User`] record
//! - [`fixture`] - the entry sequence that builds and prints two users
//! - [`config`] - inputs for the entry sequence, loaded from TOML
//! - [`error`] - error types for the library
//!
//! ## Example
//!
//! ```rust
//! use lsp_fixture_core::User;
//!
//! let user = User::new("John Doe", 30, "john@example.com")?;
//! assert_eq!(
//!     user.describe(),
//!     "Name: John Doe, Age: 30, Email: john@example.com"
//! );
//! # Ok::<(), lsp_fixture_core::ValidationError>(())
//! ```

pub mod config;
pub mod error;
pub mod fixture;
pub mod user;

pub use config::{FixtureConfig, UserEntry};
pub use error::{Error, Result, ValidationError};
pub use fixture::run;
pub use user::User;
