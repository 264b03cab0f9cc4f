/// Message shown when the user submits an empty or blank URL.
pub const VALIDATION_MESSAGE: &str = "Please enter a valid URL";

/// Prefix put in front of transport failure text.
pub const TRANSPORT_FAILURE_PREFIX: &str = "Failed to analyze sentiment: ";

/// The analysis state visible to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisResult {
    #[default]
    Idle,
    Pending,
    Success {
        label: String,
        class: String,
    },
    Failure {
        message: String,
    },
}

impl AnalysisResult {
    pub fn failure(message: impl Into<String>) -> Self {
        AnalysisResult::Failure {
            message: message.into(),
        }
    }

    /// Builds the success variant; the class is the lowercased label, kept
    /// verbatim even when it is not one of the known tones.
    pub fn success(label: impl Into<String>) -> Self {
        let label = label.into();
        let class = label.to_lowercase();
        AnalysisResult::Success { label, class }
    }

    pub fn from_outcome(outcome: PredictionOutcome) -> Self {
        match outcome {
            PredictionOutcome::Sentiment(label) => Self::success(label),
            PredictionOutcome::Rejected(message) => Self::failure(message),
            PredictionOutcome::Transport(message) => {
                Self::failure(format!("{TRANSPORT_FAILURE_PREFIX}{message}"))
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AnalysisResult::Pending)
    }
}

/// How a prediction request ended, independent of the transport used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionOutcome {
    /// The service answered with a sentiment label.
    Sentiment(String),
    /// The service answered successfully but reported its own error.
    Rejected(String),
    /// Non-2xx status, network failure, timeout or an unreadable body.
    Transport(String),
}

/// Display tone derived from a stored sentiment class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentTone {
    Positive,
    Neutral,
    Negative,
    Unrecognized,
}

impl SentimentTone {
    pub fn from_class(class: &str) -> Self {
        match class {
            "positive" => SentimentTone::Positive,
            "neutral" => SentimentTone::Neutral,
            "negative" => SentimentTone::Negative,
            _ => SentimentTone::Unrecognized,
        }
    }
}
