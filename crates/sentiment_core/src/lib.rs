//! Sentiment core: pure analysis state machine, URL normalization and
//! decorative layout generation.
mod effect;
mod layout;
mod msg;
mod normalize;
mod result;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use layout::{
    generate, generate_with_rng, OrbColor, OrbRanges, OrbSpec, DEFAULT_ORB_COUNT, ORB_PALETTE,
};
pub use msg::Msg;
pub use normalize::{normalize_url, NormalizedUrl, ValidationError};
pub use result::{
    AnalysisResult, PredictionOutcome, SentimentTone, TRANSPORT_FAILURE_PREFIX, VALIDATION_MESSAGE,
};
pub use state::{AppState, RequestId};
pub use update::update;
pub use view_model::{AlertView, AppViewModel, SentimentView};
