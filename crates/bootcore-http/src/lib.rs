//! Uniform JSON response envelope for bootcore HTTP handlers.
//!
//! Every handler answers with the same body shape:
//!
//! ```json
//! {"code": 200, "data": {"id": 7}, "msg": "操作成功"}
//! ```
//!
//! The envelope code is also written as the HTTP status. Build envelopes
//! with [`HttpResult::success`], [`HttpResult::error`] or
//! [`HttpResult::fail`], then write them into a response with
//! [`HttpResult::send`] or turn them into one with
//! [`HttpResult::into_response`].
//!
//! # Example
//!
//! ```rust
//! use bootcore_http::HttpResult;
//! use bytes::Bytes;
//! use http::{Response, StatusCode};
//!
//! let mut response = Response::new(Bytes::new());
//! HttpResult::success(vec!["a", "b"], "").send(&mut response)?;
//!
//! assert_eq!(response.status(), StatusCode::OK);
//! # Ok::<(), bootcore_http::EnvelopeError>(())
//! ```

#![warn(missing_docs)]

mod envelope;
mod error;
mod exchange;

pub use envelope::{HttpResult, DEFAULT_ERROR_CODE, DEFAULT_SUCCESS_MSG, SUCCESS_CODE};
pub use error::{EnvelopeError, EnvelopeResult};
pub use exchange::Exchange;
