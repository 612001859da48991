//! Ошибки setup/config (в тике ошибок нет — только отложенные исходы)

use thiserror::Error;

/// Ошибки инициализации симуляции
#[derive(Debug, Error)]
pub enum SetupError {
    /// Нет ни одной entity с `TrackedTarget` — AI не может оценивать perception
    #[error("tracked target not found: spawn exactly one entity with TrackedTarget")]
    TargetNotFound,

    /// Больше одной цели — непонятно кого преследовать
    #[error("ambiguous tracked target: expected 1 entity with TrackedTarget, found {count}")]
    AmbiguousTarget { count: usize },
}

/// Ошибки загрузки `ControllerConfig`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid config: {0}")]
    Invalid(String),
}
