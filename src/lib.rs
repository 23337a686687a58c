//! Random password generation from selectable character classes.
//!
//! [`generators::PasswordGenerator`] is the core; everything under
//! [`core`] and [`cli`] is the terminal front end built around it.

pub mod cli;
pub mod clipboard;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;

pub use error::{AppError, GeneratorError};
pub use generators::PasswordGenerator;
pub use models::PasswordGenerationOptions;
