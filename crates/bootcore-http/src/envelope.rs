//! The `{code, data, msg}` response envelope.

use bytes::Bytes;
use http::{header, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::exchange::Exchange;

/// Message used when a success envelope is built with an empty message.
pub const DEFAULT_SUCCESS_MSG: &str = "操作成功";

/// Code of every success envelope.
pub const SUCCESS_CODE: u16 = 200;

/// Code substituted for `0` and used by [`HttpResult::fail`].
pub const DEFAULT_ERROR_CODE: u16 = 500;

/// Uniform JSON response envelope.
///
/// Serializes as `{"code": <int>, "data": <any|null>, "msg": <string>}`.
/// The code doubles as the HTTP status when the envelope is sent.
///
/// # Example
///
/// ```rust
/// use bootcore_http::HttpResult;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Tile {
///     z: u8,
///     x: u32,
///     y: u32,
/// }
///
/// let ok = HttpResult::success(Tile { z: 3, x: 1, y: 2 }, "");
/// assert_eq!(ok.code, 200);
/// assert_eq!(ok.msg, "操作成功");
///
/// let missing: HttpResult = HttpResult::error(404, "tile not found");
/// assert_eq!(missing.code, 404);
/// assert!(missing.data.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResult<T = serde_json::Value> {
    /// Business code, also used as the HTTP status.
    pub code: u16,
    /// Payload; `None` serializes as `null`.
    pub data: Option<T>,
    /// Human readable message.
    pub msg: String,
}

impl<T> HttpResult<T> {
    /// A 200 envelope carrying `data`.
    ///
    /// An empty `msg` is replaced with [`DEFAULT_SUCCESS_MSG`].
    #[must_use]
    pub fn success(data: T, msg: impl Into<String>) -> Self {
        let mut msg = msg.into();
        if msg.is_empty() {
            msg = DEFAULT_SUCCESS_MSG.to_string();
        }

        Self {
            code: SUCCESS_CODE,
            data: Some(data),
            msg,
        }
    }

    /// An error envelope with no payload.
    ///
    /// A `code` of `0` is replaced with [`DEFAULT_ERROR_CODE`]. The message
    /// is kept as given, even when empty.
    #[must_use]
    pub fn error(code: u16, msg: impl Into<String>) -> Self {
        Self {
            code: if code == 0 { DEFAULT_ERROR_CODE } else { code },
            data: None,
            msg: msg.into(),
        }
    }

    /// A 500 envelope with no payload.
    #[must_use]
    pub fn fail(msg: impl Into<String>) -> Self {
        Self {
            code: DEFAULT_ERROR_CODE,
            data: None,
            msg: msg.into(),
        }
    }

    /// Returns `true` for envelopes built by [`success`](Self::success).
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// The envelope code as an HTTP status.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::InvalidStatus` for codes outside 100..=999.
    pub fn status(&self) -> EnvelopeResult<StatusCode> {
        StatusCode::from_u16(self.code).map_err(|_| EnvelopeError::InvalidStatus(self.code))
    }
}

impl<T: Serialize> HttpResult<T> {
    /// Write the envelope as the JSON body of `exchange`, using the code as
    /// the HTTP status.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError` if the code is not a valid HTTP status or the
    /// payload cannot be encoded. The exchange is left untouched in that
    /// case.
    pub fn send<E: Exchange + ?Sized>(&self, exchange: &mut E) -> EnvelopeResult<()> {
        let status = self.status()?;
        let body = serde_json::to_vec(self)?;

        debug!(code = self.code, bytes = body.len(), "writing response envelope");
        exchange.write_json(status, Bytes::from(body));
        Ok(())
    }

    /// Build a standalone HTTP response carrying the envelope.
    ///
    /// # Errors
    ///
    /// Same conditions as [`send`](Self::send).
    pub fn into_response(self) -> EnvelopeResult<Response<Bytes>> {
        let status = self.status()?;
        let body = serde_json::to_vec(&self)?;

        Ok(Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Bytes::from(body))?)
    }
}
