use thiserror::Error;
use warp::http::StatusCode;
use warp::reject::Rejection;

#[derive(Debug, Clone, Error)]
pub enum ServerError {
    #[error("Not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Unsupported media type")]
    UnsupportedMediaType,
    #[error("Invalid score: {0}")]
    InvalidScore(String),
    #[error("Internal server error")]
    Internal,
}

impl warp::reject::Reject for ServerError {}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::InvalidBody(_) | ServerError::InvalidScore(_) => StatusCode::BAD_REQUEST,
            ServerError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ServerError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn from_rejection(rejection: &Rejection) -> Self {
        if rejection.is_not_found() {
            ServerError::NotFound
        } else if let Some(err) = rejection.find::<ServerError>() {
            err.clone()
        } else if let Some(err) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
            ServerError::InvalidBody(err.to_string())
        } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
            ServerError::PayloadTooLarge
        } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
            ServerError::UnsupportedMediaType
        } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
            ServerError::MethodNotAllowed
        } else {
            ServerError::Internal
        }
    }
}
