use std::io;

use engine_logging::{engine_debug, engine_info};
use sentiment_core::{Effect, Msg};
use sentiment_engine::{outcome_from_result, EngineEvent, EngineHandle, PredictSettings};

/// Executes core effects against the prediction engine and turns engine
/// events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: PredictSettings) -> io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Predict {
                    request_id,
                    news_url,
                } => {
                    engine_info!("Predict request_id={} url={}", request_id, news_url);
                    self.engine.predict(request_id, news_url);
                }
                Effect::CancelPrediction { request_id } => {
                    engine_debug!("CancelPrediction request_id={}", request_id);
                    self.engine.cancel(request_id);
                }
            }
        }
    }

    /// Collects every completion reported since the last call.
    pub fn drain(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::PredictionCompleted { request_id, result } => {
                    inbox.push(Msg::PredictionDone {
                        request_id,
                        outcome: outcome_from_result(result),
                    });
                }
            }
        }
        inbox
    }
}
