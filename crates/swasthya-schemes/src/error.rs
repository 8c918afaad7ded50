use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemeError {
    #[error("unknown income band: {0}")]
    UnknownIncomeBand(String),

    #[error("unknown family size band: {0}")]
    UnknownFamilySize(String),
}
