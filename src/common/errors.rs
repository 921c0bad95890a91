use lambda_http::{Error as LambdaError, Response};
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures talking to the table or decoding what it returned.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{operation} failed")]
    Sdk {
        operation: &'static str,
        #[source]
        cause: BoxError,
    },
    #[error("attribute `{0}` has a type that can't be represented as JSON")]
    UnsupportedAttribute(String),
}

impl StorageError {
    pub fn sdk<E>(operation: &'static str) -> impl FnOnce(E) -> Self
    where
        E: Into<BoxError>,
    {
        move |err| Self::Sdk {
            operation,
            cause: err.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Request rejected before touching storage. The response goes back as is.
    #[error("request rejected with status {}", .0.status())]
    HttpError(Response<String>),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("request body is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("request body is JSON null")]
    NullBody,
    #[error("{0}")]
    LambdaError(LambdaError),
}

impl From<lambda_http::http::Error> for Error {
    fn from(err: lambda_http::http::Error) -> Self {
        Self::LambdaError(Box::new(err))
    }
}
