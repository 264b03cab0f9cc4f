use engine_logging::{engine_debug, engine_warn};
use sentiment_core::{update, AnalysisResult, AppState, Effect, Msg, PredictionOutcome};

use crate::{FailureKind, PredictError, Prediction, Predictor};

/// Maps an engine result into the transport-independent outcome the core
/// state machine understands.
pub fn outcome_from_result(result: Result<Prediction, PredictError>) -> PredictionOutcome {
    match result {
        Ok(Prediction::Sentiment(label)) => PredictionOutcome::Sentiment(label),
        Ok(Prediction::Rejected(message)) => PredictionOutcome::Rejected(message),
        Err(err) if err.kind == FailureKind::Cancelled => {
            engine_debug!("Superseded request ended: {}", err.message);
            PredictionOutcome::Transport(err.message)
        }
        Err(err) => {
            engine_warn!("Error analyzing sentiment ({}): {}", err.kind, err.message);
            PredictionOutcome::Transport(err.message)
        }
    }
}

/// Runs one full submission: validation, normalization, a single prediction
/// call and interpretation of its outcome.
///
/// Blank input resolves immediately without touching `predictor`.
pub async fn analyze(predictor: &dyn Predictor, raw_input: &str) -> AnalysisResult {
    let (state, _) = update(AppState::new(), Msg::InputChanged(raw_input.to_string()));
    let (mut state, effects) = update(state, Msg::AnalyzeClicked);

    for effect in effects {
        if let Effect::Predict {
            request_id,
            news_url,
        } = effect
        {
            let outcome = outcome_from_result(predictor.predict(&news_url).await);
            let (next, _) = update(
                state,
                Msg::PredictionDone {
                    request_id,
                    outcome,
                },
            );
            state = next;
        }
    }

    state.result().clone()
}
