use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewCliError {
    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Api(#[from] gherkin_review_common::Error),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("{0}")]
    Load(String),

    #[error("Screenshot {0} not found")]
    NotFound(String),

    #[error("{0}")]
    Blocked(String),

    #[error("Feedback was not recorded: {0}")]
    Rejected(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReviewCliError>;
