use axum::http::StatusCode;

/// Why a push payload was dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PushRejection {
    #[error("missing or mismatched web_push marker")]
    MarkerMismatch,
    #[error("payload has no notification object")]
    MissingNotification,
    #[error("notification has no title")]
    MissingTitle,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("unknown window client {0}")]
    UnknownClient(u64),
    #[error("unknown notification {0}")]
    UnknownNotification(u64),
    #[error("platform unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ClickError {
    #[error("malformed notification data: {0}")]
    MalformedData(#[from] serde_json::Error),
    #[error("invalid navigation target {target:?}: {source}")]
    InvalidUrl {
        target: String,
        source: url::ParseError,
    },
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Outcome of a task registered on an extendable event.
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error(transparent)]
    Click(#[from] ClickError),
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error("event task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<ClickError> for AppError {
    fn from(err: ClickError) -> Self {
        match err {
            ClickError::Platform(PlatformError::UnknownNotification(id)) => {
                Self::not_found(format!("notification {id} not found"))
            }
            other => Self::internal(other),
        }
    }
}

impl From<WorkerError> for AppError {
    fn from(err: WorkerError) -> Self {
        match err {
            WorkerError::Click(err) => err.into(),
            other => Self::internal(other),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
