#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input.
    InputChanged(String),
    /// User asked for the current input to be analyzed.
    AnalyzeClicked,
    /// Engine completion for a prediction request.
    PredictionDone {
        request_id: crate::RequestId,
        outcome: crate::PredictionOutcome,
    },
    /// UI/render tick driving the busy indicator.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
