use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send one prediction request for an already normalized URL.
    Predict { request_id: RequestId, news_url: String },
    /// Abandon an in-flight request that a newer submission superseded.
    CancelPrediction { request_id: RequestId },
}
