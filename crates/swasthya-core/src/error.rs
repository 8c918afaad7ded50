use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid facility type: {0}")]
    InvalidFacilityType(String),

    #[error("invalid language: {0}")]
    InvalidLanguage(String),
}
