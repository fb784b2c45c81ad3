#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid account kind {0:?}")]
    InvalidKind(String),

    #[error("unknown currency {0:?}")]
    UnknownCurrency(String),

    #[error("unknown account {0}")]
    UnknownAccount(String),

    #[error("goal {0:?} must be linked to a capital account")]
    InvalidGoalAccount(String),

    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
