//! Sentiment engine: prediction service client and effect execution.
mod analyze;
mod engine;
mod predict;
mod types;

pub use analyze::{analyze, outcome_from_result};
pub use engine::EngineHandle;
pub use predict::{interpret_body, PredictSettings, Predictor, ReqwestPredictor, PREDICT_PATH};
pub use types::{EngineEvent, FailureKind, PredictError, Prediction};
