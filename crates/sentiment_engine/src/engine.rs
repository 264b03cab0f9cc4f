use std::collections::HashMap;
use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use engine_logging::{engine_debug, engine_warn};
use sentiment_core::RequestId;
use tokio_util::sync::CancellationToken;

use crate::predict::{PredictSettings, Predictor, ReqwestPredictor};
use crate::{EngineEvent, FailureKind, PredictError};

enum EngineCommand {
    Predict {
        request_id: RequestId,
        news_url: String,
    },
    Cancel {
        request_id: RequestId,
    },
}

type InFlight = Arc<Mutex<HashMap<RequestId, CancellationToken>>>;

/// Runs prediction requests on a background tokio runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: PredictSettings) -> io::Result<Self> {
        Self::with_predictor(Arc::new(ReqwestPredictor::new(settings)))
    }

    pub fn with_predictor(predictor: Arc<dyn Predictor>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("sentiment-engine".to_string())
            .spawn(move || {
                let in_flight: InFlight = Arc::new(Mutex::new(HashMap::new()));
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        EngineCommand::Predict {
                            request_id,
                            news_url,
                        } => {
                            let token = CancellationToken::new();
                            if let Ok(mut map) = in_flight.lock() {
                                map.insert(request_id, token.clone());
                            }
                            let predictor = predictor.clone();
                            let event_tx = event_tx.clone();
                            let in_flight = in_flight.clone();
                            runtime.spawn(async move {
                                let result =
                                    run_prediction(predictor.as_ref(), &news_url, token).await;
                                if let Ok(mut map) = in_flight.lock() {
                                    map.remove(&request_id);
                                }
                                let _ = event_tx.send(EngineEvent::PredictionCompleted {
                                    request_id,
                                    result,
                                });
                            });
                        }
                        EngineCommand::Cancel { request_id } => {
                            let token = in_flight
                                .lock()
                                .ok()
                                .and_then(|mut map| map.remove(&request_id));
                            match token {
                                Some(token) => {
                                    engine_debug!("Cancelling request {}", request_id);
                                    token.cancel();
                                }
                                None => engine_debug!("Request {} already finished", request_id),
                            }
                        }
                    }
                }
                // Dropping the runtime aborts whatever is still running.
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn predict(&self, request_id: RequestId, news_url: impl Into<String>) {
        if self
            .cmd_tx
            .send(EngineCommand::Predict {
                request_id,
                news_url: news_url.into(),
            })
            .is_err()
        {
            engine_warn!("Engine thread is gone; request {} dropped", request_id);
        }
    }

    pub fn cancel(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { request_id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event or until the engine thread exits.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn run_prediction(
    predictor: &dyn Predictor,
    news_url: &str,
    token: CancellationToken,
) -> Result<crate::Prediction, PredictError> {
    tokio::select! {
        result = predictor.predict(news_url) => result,
        _ = token.cancelled() => Err(PredictError::new(FailureKind::Cancelled, "request cancelled")),
    }
}
