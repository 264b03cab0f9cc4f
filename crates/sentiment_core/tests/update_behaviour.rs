use std::sync::Once;

use pretty_assertions::assert_eq;
use sentiment_core::{
    update, AlertView, AnalysisResult, AppState, Effect, Msg, PredictionOutcome,
    SentimentTone, VALIDATION_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::AnalyzeClicked)
}

fn done(state: AppState, request_id: u64, outcome: PredictionOutcome) -> AppState {
    let (state, effects) = update(
        state,
        Msg::PredictionDone {
            request_id,
            outcome,
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn empty_input_fails_without_request() {
    init_logging();
    let (mut state, effects) = submit(AppState::new(), "");

    assert!(effects.is_empty());
    assert_eq!(state.result(), &AnalysisResult::failure(VALIDATION_MESSAGE));
    assert_eq!(state.in_flight(), None);
    let view = state.view();
    assert!(!view.busy);
    assert_eq!(
        view.alert,
        Some(AlertView {
            message: "Please enter a valid URL".to_string(),
        })
    );
    assert!(state.consume_dirty());
}

#[test]
fn blank_input_fails_without_request() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "   ");

    assert!(effects.is_empty());
    assert_eq!(state.result(), &AnalysisResult::failure(VALIDATION_MESSAGE));
}

#[test]
fn submit_normalizes_and_goes_pending() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "example.com");

    assert_eq!(
        effects,
        vec![Effect::Predict {
            request_id: 1,
            news_url: "https://example.com".to_string(),
        }]
    );
    assert_eq!(state.result(), &AnalysisResult::Pending);
    let view = state.view();
    assert!(view.busy);
    assert!(view.alert.is_none());
    assert!(view.sentiment.is_none());
}

#[test]
fn sentiment_completion_sets_label_and_lowercase_class() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let state = done(state, 1, PredictionOutcome::Sentiment("Positive".to_string()));

    assert_eq!(
        state.result(),
        &AnalysisResult::Success {
            label: "Positive".to_string(),
            class: "positive".to_string(),
        }
    );
    let view = state.view();
    assert!(!view.busy);
    let sentiment = view.sentiment.unwrap();
    assert_eq!(sentiment.tone, SentimentTone::Positive);
    assert!(view.alert.is_none());
}

#[test]
fn unknown_class_is_kept_verbatim() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let state = done(state, 1, PredictionOutcome::Sentiment("Mixed".to_string()));

    let sentiment = state.view().sentiment.unwrap();
    assert_eq!(sentiment.label, "Mixed");
    assert_eq!(sentiment.class, "mixed");
    assert_eq!(sentiment.tone, SentimentTone::Unrecognized);
}

#[test]
fn rejected_completion_shows_service_message() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let state = done(state, 1, PredictionOutcome::Rejected("unreachable".to_string()));

    assert_eq!(state.result(), &AnalysisResult::failure("unreachable"));
}

#[test]
fn transport_completion_is_prefixed() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let state = done(
        state,
        1,
        PredictionOutcome::Transport("Network response was not ok: 500".to_string()),
    );

    assert_eq!(
        state.result(),
        &AnalysisResult::failure("Failed to analyze sentiment: Network response was not ok: 500")
    );
}

#[test]
fn resubmit_clears_previous_message() {
    init_logging();
    let (state, _) = submit(AppState::new(), "");
    assert!(state.view().alert.is_some());

    let (state, effects) = submit(state, "news.example.org/story");
    assert_eq!(effects.len(), 1);
    assert!(state.view().alert.is_none());
    assert!(state.view().busy);
}

#[test]
fn overlapping_submission_cancels_and_suppresses_stale_response() {
    init_logging();
    let (state, _) = submit(AppState::new(), "first.example.com");
    let (state, effects) = submit(state, "second.example.com");

    assert_eq!(
        effects,
        vec![
            Effect::CancelPrediction { request_id: 1 },
            Effect::Predict {
                request_id: 2,
                news_url: "https://second.example.com".to_string(),
            },
        ]
    );

    // The first response arrives late and must not be shown.
    let (mut state, _) = update(
        state,
        Msg::PredictionDone {
            request_id: 1,
            outcome: PredictionOutcome::Sentiment("Negative".to_string()),
        },
    );
    assert_eq!(state.result(), &AnalysisResult::Pending);

    state.consume_dirty();
    let state = done(state, 2, PredictionOutcome::Sentiment("Neutral".to_string()));
    assert_eq!(state.view().sentiment.unwrap().tone, SentimentTone::Neutral);
}

#[test]
fn stale_response_does_not_mark_dirty() {
    init_logging();
    let (state, _) = submit(AppState::new(), "a.example.com");
    let (mut state, _) = submit(state, "b.example.com");
    assert!(state.consume_dirty());

    let (mut state, _) = update(
        state,
        Msg::PredictionDone {
            request_id: 1,
            outcome: PredictionOutcome::Rejected("late".to_string()),
        },
    );
    assert!(!state.consume_dirty());
}

#[test]
fn blank_resubmit_cancels_outstanding_request() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let (state, effects) = submit(state, "");

    assert_eq!(effects, vec![Effect::CancelPrediction { request_id: 1 }]);
    assert_eq!(state.result(), &AnalysisResult::failure(VALIDATION_MESSAGE));

    let state = done(state, 1, PredictionOutcome::Sentiment("Positive".to_string()));
    assert_eq!(state.result(), &AnalysisResult::failure(VALIDATION_MESSAGE));
}

#[test]
fn request_ids_increase_across_submissions() {
    init_logging();
    let (state, _) = submit(AppState::new(), "a.example.com");
    let state = done(state, 1, PredictionOutcome::Sentiment("Positive".to_string()));
    let (_state, effects) = submit(state, "b.example.com");

    assert_eq!(
        effects,
        vec![Effect::Predict {
            request_id: 2,
            news_url: "https://b.example.com".to_string(),
        }]
    );
}

#[test]
fn tick_advances_spinner_only_while_pending() {
    init_logging();
    let (state, _) = submit(AppState::new(), "example.com");
    let (state, _) = update(state, Msg::Tick);
    let (state, _) = update(state, Msg::Tick);
    assert_eq!(state.view().spinner_frame, 2);

    let mut state = done(state, 1, PredictionOutcome::Sentiment("Positive".to_string()));
    assert_eq!(state.view().spinner_frame, 0);
    state.consume_dirty();

    let (mut state, _) = update(state, Msg::Tick);
    assert_eq!(state.view().spinner_frame, 0);
    assert!(!state.consume_dirty());
}

#[test]
fn unchanged_input_is_not_dirty() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::InputChanged("x".to_string()));
    assert!(state.consume_dirty());
    let (mut state, _) = update(state, Msg::InputChanged("x".to_string()));
    assert!(!state.consume_dirty());
}
