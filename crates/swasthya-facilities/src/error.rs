use thiserror::Error;

#[derive(Debug, Error)]
pub enum FacilityError {
    #[error("geodata request failed: {0}")]
    Request(String),

    #[error("geodata service returned status {status}")]
    Status { status: u16 },

    #[error("geodata response parsing failed: {0}")]
    ResponseParse(String),
}

impl From<reqwest::Error> for FacilityError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FacilityError::ResponseParse(e.to_string())
        } else {
            FacilityError::Request(e.to_string())
        }
    }
}
