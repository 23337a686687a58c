// src/error.rs
use thiserror::Error;

/// Message shown when generation is requested with every class disabled.
pub const NO_CLASS_SELECTED_MESSAGE: &str = "Veuillez choisir au moins une option";

/// Message shown when a copy is attempted before anything was generated.
pub const NOTHING_TO_COPY_MESSAGE: &str = "Veuillez générer un mot de passe";

/// Message shown after a successful clipboard write.
pub const COPIED_MESSAGE: &str = "Mot de passe copié";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("{}", NO_CLASS_SELECTED_MESSAGE)]
    NoClassSelected,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
