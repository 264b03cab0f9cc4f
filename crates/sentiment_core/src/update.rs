use crate::{AnalysisResult, AppState, Effect, Msg, NormalizedUrl, VALIDATION_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::AnalyzeClicked => {
            let mut effects = Vec::with_capacity(2);
            // A newer submission replaces whatever is still outstanding.
            if let Some(request_id) = state.start_submission() {
                effects.push(Effect::CancelPrediction { request_id });
            }

            match NormalizedUrl::parse(state.input()) {
                Err(_) => {
                    state.fail_validation(VALIDATION_MESSAGE);
                }
                Ok(url) => {
                    let request_id = state.begin_request();
                    effects.push(Effect::Predict {
                        request_id,
                        news_url: url.into_string(),
                    });
                }
            }
            effects
        }
        Msg::PredictionDone {
            request_id,
            outcome,
        } => {
            // Stale completions are dropped without touching the state.
            state.complete_request(request_id, AnalysisResult::from_outcome(outcome));
            Vec::new()
        }
        Msg::Tick => {
            state.advance_spinner();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
