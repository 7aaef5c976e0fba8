use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::AppSettings;
use crate::models::error::AppError;
use crate::services::notify;

/// Caller-specified parts of a request: extra headers and an optional raw
/// JSON body. Headers merge over the default JSON content type.
#[derive(Debug, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl RequestOptions {
    /// Adds a header, replacing the default for that name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the request body, sent as-is.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the final header map: JSON content type first, caller entries
    /// inserted over it. Malformed header names or values are skipped.
    fn header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                map.insert(name, value);
            }
        }

        map
    }
}

/// Parses a caller-supplied HTTP method name, defaulting to GET.
pub fn parse_method(method: Option<&str>) -> Result<Method, AppError> {
    match method {
        None => Ok(Method::GET),
        Some(raw) => Method::from_bytes(raw.to_uppercase().as_bytes())
            .map_err(|_| AppError::ApiError(format!("Invalid HTTP method: {raw}"))),
    }
}

/// Thin JSON client over the browser fetch API.
///
/// Every request carries a JSON content type unless the caller overrides it;
/// any non-2xx response or transport failure surfaces a generic error banner
/// and returns the error to the caller. There is no retry, timeout, or
/// cancellation here.
pub struct ApiClient {
    http: reqwest::Client,
    settings: AppSettings,
}

impl ApiClient {
    /// Creates a client for the given settings.
    pub fn new(settings: AppSettings) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, settings })
    }

    /// Returns the settings this client was built with.
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Issues a request with caller-specified method, headers, and body, and
    /// parses the JSON response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, AppError> {
        let mut request = self
            .http
            .request(method, self.settings.url(path))
            .headers(options.header_map());
        if let Some(body) = options.body {
            request = request.body(body);
        }
        self.execute(request).await
    }

    /// Issues a GET and parses the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, RequestOptions::default())
            .await
    }

    /// Issues a POST with a JSON-encoded body and parses the JSON response.
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)
            .map_err(|e| AppError::ApiError(format!("Failed to encode body: {e}")))?;
        self.request(Method::POST, path, RequestOptions::default().body(body))
            .await
    }

    /// Executes a single attempt and notifies on failure.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, AppError> {
        match self.send(request).await {
            Ok(value) => Ok(value),
            Err(e) => {
                gloo::console::error!(&format!("Request failed: {e}"));
                notify::show_error("Request failed. Please try again.");
                Err(e)
            }
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, AppError> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::ApiError(format!("Network error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }
}

/// Creates an error based on HTTP status code.
fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    match status.as_u16() {
        401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
        404 => AppError::NotFound(format!("Resource not found: {body}")),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_for_status_classes() {
        let status = reqwest::StatusCode::UNAUTHORIZED;
        assert!(matches!(
            error_for_status(status, ""),
            AppError::AuthError(_)
        ));

        let status = reqwest::StatusCode::NOT_FOUND;
        assert!(matches!(error_for_status(status, ""), AppError::NotFound(_)));

        let status = reqwest::StatusCode::BAD_REQUEST;
        assert!(matches!(error_for_status(status, ""), AppError::ApiError(_)));

        let status = reqwest::StatusCode::INTERNAL_SERVER_ERROR;
        let err = error_for_status(status, "boom");
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_default_headers_carry_json_content_type() {
        let map = RequestOptions::default().header_map();
        assert_eq!(map.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_caller_headers_merge_over_defaults() {
        let options = RequestOptions::default()
            .header("Content-Type", "text/plain")
            .header("X-Requested-With", "console");
        let map = options.header_map();

        assert_eq!(map.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(map.get("x-requested-with").unwrap(), "console");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_malformed_caller_headers_are_skipped() {
        let options = RequestOptions::default().header("bad name", "value");
        let map = options.header_map();

        assert!(map.get("bad name").is_none());
        assert_eq!(map.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!(parse_method(None).unwrap(), Method::GET);
        assert_eq!(parse_method(Some("post")).unwrap(), Method::POST);
        assert_eq!(parse_method(Some("DELETE")).unwrap(), Method::DELETE);
        assert!(parse_method(Some("not a method")).is_err());
    }
}
