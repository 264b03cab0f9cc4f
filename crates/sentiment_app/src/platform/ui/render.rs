use sentiment_core::{AppState, AppViewModel, SentimentTone};

use super::constants::*;
use super::terminal::{Span, SpanStyle, TerminalCommand};

/// What the startup screen already shows; diff the first render against it.
pub fn startup_view() -> AppViewModel {
    AppState::new().view()
}

/// Turns a view change into terminal output.
///
/// The terminal is append-only, so results are printed once per change
/// rather than redrawn; the busy spinner lives on a transient status line.
pub fn render(previous: Option<&AppViewModel>, view: &AppViewModel) -> Vec<TerminalCommand> {
    if view.busy {
        let frame = SPINNER_FRAMES[usize::from(view.spinner_frame) % SPINNER_FRAMES.len()];
        return vec![TerminalCommand::UpdateStatus(format!("{frame} {BUSY_TEXT}"))];
    }

    let changed = previous.map_or(true, |prev| {
        prev.busy
            || prev.submission != view.submission
            || prev.alert != view.alert
            || prev.sentiment != view.sentiment
    });
    if !changed {
        return Vec::new();
    }

    let mut cmds = vec![TerminalCommand::ClearStatus];
    if let Some(alert) = &view.alert {
        cmds.push(TerminalCommand::PrintLine(vec![Span::new(
            format!("! {}", alert.message),
            SpanStyle::Error,
        )]));
    }
    if let Some(sentiment) = &view.sentiment {
        cmds.push(TerminalCommand::PrintLine(vec![
            Span::new(format!("{SENTIMENT_CAPTION} "), SpanStyle::Plain),
            Span::new(sentiment.label.clone(), SpanStyle::Tone(sentiment.tone)),
        ]));
        if sentiment.tone == SentimentTone::Unrecognized {
            cmds.push(TerminalCommand::PrintLine(vec![Span::new(
                format!("(unrecognized sentiment class \"{}\")", sentiment.class),
                SpanStyle::Hint,
            )]));
        }
    }
    cmds.push(TerminalCommand::ShowPrompt);
    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sentiment_core::{update, AppState, Msg, PredictionOutcome};

    fn submit(state: AppState, input: &str) -> AppState {
        let (state, _) = update(state, Msg::InputChanged(input.to_string()));
        update(state, Msg::AnalyzeClicked).0
    }

    fn finish(state: AppState, outcome: PredictionOutcome) -> AppState {
        let request_id = state.in_flight().unwrap();
        update(
            state,
            Msg::PredictionDone {
                request_id,
                outcome,
            },
        )
        .0
    }

    #[test]
    fn busy_view_shows_spinner_only() {
        let state = submit(AppState::new(), "example.com");
        let (state, _) = update(state, Msg::Tick);

        assert_eq!(
            render(None, &state.view()),
            vec![TerminalCommand::UpdateStatus("/ Analyzing...".to_string())]
        );
    }

    #[test]
    fn validation_failure_prints_alert() {
        let state = submit(AppState::new(), "");

        assert_eq!(
            render(Some(&AppState::new().view()), &state.view()),
            vec![
                TerminalCommand::ClearStatus,
                TerminalCommand::PrintLine(vec![Span::new(
                    "! Please enter a valid URL",
                    SpanStyle::Error
                )]),
                TerminalCommand::ShowPrompt,
            ]
        );
    }

    #[test]
    fn repeated_failure_is_printed_again() {
        let first = submit(AppState::new(), "");
        let second = submit(first.clone(), "");

        assert!(!render(Some(&first.view()), &second.view()).is_empty());
    }

    #[test]
    fn first_input_after_startup_prints_nothing() {
        let (state, _) = update(AppState::new(), Msg::InputChanged("example.com".to_string()));

        assert!(render(Some(&startup_view()), &state.view()).is_empty());
    }

    #[test]
    fn input_edits_print_nothing() {
        let state = submit(AppState::new(), "");
        let before = state.view();
        let (state, _) = update(state, Msg::InputChanged("typing".to_string()));

        assert!(render(Some(&before), &state.view()).is_empty());
    }

    #[test]
    fn sentiment_is_printed_with_tone() {
        let pending = submit(AppState::new(), "example.com");
        let done = finish(pending.clone(), PredictionOutcome::Sentiment("Negative".to_string()));

        assert_eq!(
            render(Some(&pending.view()), &done.view()),
            vec![
                TerminalCommand::ClearStatus,
                TerminalCommand::PrintLine(vec![
                    Span::new("Sentiment: ", SpanStyle::Plain),
                    Span::new("Negative", SpanStyle::Tone(SentimentTone::Negative)),
                ]),
                TerminalCommand::ShowPrompt,
            ]
        );
    }

    #[test]
    fn unrecognized_class_gets_a_note() {
        let pending = submit(AppState::new(), "example.com");
        let done = finish(pending.clone(), PredictionOutcome::Sentiment("Mixed".to_string()));

        let cmds = render(Some(&pending.view()), &done.view());
        assert_eq!(cmds.len(), 4);
        assert_eq!(
            cmds[2],
            TerminalCommand::PrintLine(vec![Span::new(
                "(unrecognized sentiment class \"mixed\")",
                SpanStyle::Hint
            )])
        );
    }
}
