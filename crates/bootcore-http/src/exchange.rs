//! Response targets an envelope can be written into.

use bytes::Bytes;
use http::{header, HeaderValue, Response, StatusCode};
use http_body_util::Full;

/// The response half of an in-flight request/response exchange.
///
/// Implemented for plain `http::Response<Bytes>` and for the
/// `Response<Full<Bytes>>` bodies hyper services return.
pub trait Exchange {
    /// Replace status, content type and body with a JSON payload.
    fn write_json(&mut self, status: StatusCode, body: Bytes);
}

impl Exchange for Response<Bytes> {
    fn write_json(&mut self, status: StatusCode, body: Bytes) {
        set_json_head(self, status);
        *self.body_mut() = body;
    }
}

impl Exchange for Response<Full<Bytes>> {
    fn write_json(&mut self, status: StatusCode, body: Bytes) {
        set_json_head(self, status);
        *self.body_mut() = Full::new(body);
    }
}

fn set_json_head<B>(response: &mut Response<B>, status: StatusCode) {
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_write_into_bytes_response() {
        let mut response = Response::new(Bytes::new());
        response.write_json(StatusCode::NOT_FOUND, Bytes::from_static(b"{}"));

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(response.body().as_ref(), b"{}");
    }

    #[test]
    fn test_write_replaces_existing_content_type() {
        let mut response = Response::builder()
            .header(header::CONTENT_TYPE, "text/html")
            .body(Bytes::new())
            .unwrap();
        response.write_json(StatusCode::OK, Bytes::from_static(b"null"));

        let values: Vec<_> = response.headers().get_all(header::CONTENT_TYPE).iter().collect();
        assert_eq!(values, vec!["application/json"]);
    }

    #[tokio::test]
    async fn test_write_into_full_response() {
        let mut response = Response::new(Full::new(Bytes::new()));
        response.write_json(StatusCode::CREATED, Bytes::from_static(b"[1]"));

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body.as_ref(), b"[1]");
    }
}
