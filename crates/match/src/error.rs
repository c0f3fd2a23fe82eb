use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("abbreviation is required (empty is valid, absent is not)")]
    MissingAbbrev,

    #[error("options are required (pass {{}} for defaults)")]
    MissingOptions,

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
