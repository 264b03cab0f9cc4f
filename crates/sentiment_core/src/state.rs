use crate::view_model::{AlertView, AppViewModel, SentimentView};
use crate::{AnalysisResult, SentimentTone};

/// Monotonically increasing tag attached to every outbound request.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    result: AnalysisResult,
    next_request_id: RequestId,
    in_flight: Option<RequestId>,
    submissions: u64,
    spinner_frame: u8,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }

    /// The request whose completion will be applied, if one is outstanding.
    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn view(&self) -> AppViewModel {
        let alert = match &self.result {
            AnalysisResult::Failure { message } => Some(AlertView {
                message: message.clone(),
            }),
            _ => None,
        };
        let sentiment = match &self.result {
            AnalysisResult::Success { label, class } => Some(SentimentView {
                label: label.clone(),
                class: class.clone(),
                tone: SentimentTone::from_class(class),
            }),
            _ => None,
        };

        AppViewModel {
            submission: self.submissions,
            busy: self.result.is_pending(),
            spinner_frame: self.spinner_frame,
            alert,
            sentiment,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.mark_dirty();
        }
    }

    /// Starts a new submission: clears the previous result and forgets any
    /// outstanding request, returning its id.
    pub(crate) fn start_submission(&mut self) -> Option<RequestId> {
        self.submissions += 1;
        let superseded = self.in_flight.take();
        self.result = AnalysisResult::Idle;
        self.spinner_frame = 0;
        self.mark_dirty();
        superseded
    }

    pub(crate) fn fail_validation(&mut self, message: impl Into<String>) {
        self.result = AnalysisResult::failure(message);
        self.mark_dirty();
    }

    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(request_id);
        self.result = AnalysisResult::Pending;
        self.mark_dirty();
        request_id
    }

    /// Applies a completion only when it belongs to the latest request.
    pub(crate) fn complete_request(
        &mut self,
        request_id: RequestId,
        result: AnalysisResult,
    ) {
        if self.in_flight != Some(request_id) {
            return;
        }
        self.in_flight = None;
        self.result = result;
        self.spinner_frame = 0;
        self.mark_dirty();
    }

    pub(crate) fn advance_spinner(&mut self) {
        if self.result.is_pending() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            self.mark_dirty();
        }
    }
}
