use crate::SentimentTone;

/// The single inline message area; only failures are ever shown in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertView {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentView {
    pub label: String,
    pub class: String,
    pub tone: SentimentTone,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Number of submissions so far; changes on every analyze request.
    pub submission: u64,
    /// A request is outstanding; show the busy indicator.
    pub busy: bool,
    pub spinner_frame: u8,
    pub alert: Option<AlertView>,
    pub sentiment: Option<SentimentView>,
    pub dirty: bool,
}
