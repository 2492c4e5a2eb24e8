// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BlitzrError>;

#[derive(Debug, Error)]
pub enum BlitzrError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("bad request: HTTP {status} - {message}")]
    Client { status: u16, message: String },

    #[error("Blitzr server error: HTTP {status}")]
    Server { status: u16 },

    #[error("invalid response from Blitzr API: {0}")]
    InvalidResponse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
