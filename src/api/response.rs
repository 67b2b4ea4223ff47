//! Standard API response types

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Response for single data item
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Simple message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl MessageResponse {
    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Raw body offered as a file download.
#[derive(Debug)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, content_type: &'static str, body: String) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            body,
        }
    }

    /// `attachment; filename="..."` with an RFC 5987 `filename*` for
    /// names that are not plain ASCII.
    pub fn content_disposition(&self) -> String {
        let ascii: String = self
            .file_name
            .chars()
            .map(|c| {
                if c.is_ascii_graphic() && c != '"' && c != '\\' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if ascii == self.file_name {
            return format!("attachment; filename=\"{}\"", ascii);
        }

        let encoded: String = url::form_urlencoded::byte_serialize(self.file_name.as_bytes())
            .collect::<String>()
            .replace('+', "%20");
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            ascii, encoded
        )
    }
}

impl IntoResponse for Attachment {
    fn into_response(self) -> Response {
        let disposition = match HeaderValue::from_str(&self.content_disposition()) {
            Ok(v) => v,
            Err(_) => HeaderValue::from_static("attachment"),
        };

        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(self.content_type)),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_names_use_plain_filename() {
        let a = Attachment::new("Application_FDA-1.csv", "text/csv", String::new());
        assert_eq!(
            a.content_disposition(),
            "attachment; filename=\"Application_FDA-1.csv\""
        );
    }

    #[test]
    fn non_ascii_names_get_encoded_variant() {
        let a = Attachment::new("Application_衛部 1.json", "application/json", String::new());
        let value = a.content_disposition();
        assert!(value.starts_with("attachment; filename=\"Application____1.json\""));
        assert!(value.ends_with("filename*=UTF-8''Application_%E8%A1%9B%E9%83%A8%201.json"));
    }

    #[test]
    fn download_sets_headers() {
        let response =
            Attachment::new("Application_Draft.csv", "text/csv; charset=utf-8", "x".into())
                .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Application_Draft.csv\""
        );
    }
}
