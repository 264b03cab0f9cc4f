use std::time::Duration;

use engine_logging::{engine_debug, engine_info};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::{FailureKind, PredictError, Prediction};

/// Path of the prediction endpoint, relative to the service base URL.
pub const PREDICT_PATH: &str = "api/predict";

#[derive(Debug, Clone)]
pub struct PredictSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for PredictSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 64 * 1024,
        }
    }
}

impl PredictSettings {
    /// Full URL of the prediction endpoint under `base_url`.
    pub fn endpoint(&self) -> Result<Url, PredictError> {
        let mut base = Url::parse(&self.base_url)
            .map_err(|err| PredictError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(PREDICT_PATH)
            .map_err(|err| PredictError::new(FailureKind::InvalidEndpoint, err.to_string()))
    }
}

#[async_trait::async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, news_url: &str) -> Result<Prediction, PredictError>;
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    news_url: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    sentiment: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct ReqwestPredictor {
    settings: PredictSettings,
}

impl ReqwestPredictor {
    pub fn new(settings: PredictSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, PredictError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| PredictError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Predictor for ReqwestPredictor {
    async fn predict(&self, news_url: &str) -> Result<Prediction, PredictError> {
        let endpoint = self.settings.endpoint()?;
        let client = self.build_client()?;
        engine_info!("Analyzing URL: {}", news_url);

        let response = client
            .post(endpoint)
            .json(&PredictRequest { news_url })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("Network response was not ok: {}", status.as_u16()),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, next_len));
            }
            body.extend_from_slice(&chunk);
        }

        engine_debug!(
            "Response data ({} bytes): {}",
            body.len(),
            String::from_utf8_lossy(&body)
        );
        interpret_body(&body)
    }
}

/// Interprets a 2xx response body.
///
/// A truthy `error` field wins over `sentiment`; otherwise `sentiment` must be
/// a string.
pub fn interpret_body(body: &[u8]) -> Result<Prediction, PredictError> {
    let response: PredictResponse = serde_json::from_slice(body)
        .map_err(|err| PredictError::new(FailureKind::InvalidResponse, err.to_string()))?;

    if let Some(message) = response.error.as_ref().and_then(error_message) {
        return Ok(Prediction::Rejected(message));
    }

    match response.sentiment {
        Some(Value::String(label)) => Ok(Prediction::Sentiment(label)),
        Some(other) => Err(PredictError::new(
            FailureKind::InvalidResponse,
            format!("sentiment is not a string: {other}"),
        )),
        None => Err(PredictError::new(
            FailureKind::InvalidResponse,
            "response has no sentiment field",
        )),
    }
}

fn error_message(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn too_large(max_bytes: u64, actual: u64) -> PredictError {
    PredictError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> PredictError {
    if err.is_timeout() {
        return PredictError::new(FailureKind::Timeout, err.to_string());
    }
    PredictError::new(FailureKind::Network, err.to_string())
}
