// SPDX-License-Identifier: GPL-3.0-only
use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Request to food API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Food API responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl ApiError {
    /// HTTP status of a rejected request, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Transport(e) => e.status(),
            ApiError::Status { status, .. } => Some(*status),
        }
    }
}
