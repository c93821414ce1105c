use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Failed to fetch vacancies from: '{url}', status: {status}")]
    RequestNotOk { url: String, status: StatusCode },
    #[error("Credential not set: '{0}'")]
    MissingCredential(&'static str),
    #[error("Invalid header value: '{0}'")]
    InvalidHeader(#[from] InvalidHeaderValue),
}
