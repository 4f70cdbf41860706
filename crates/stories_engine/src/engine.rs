use std::collections::HashMap;
use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use stories_logging::{stories_debug, stories_error, stories_warn};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Fetch { request_id: RequestId, url: String },
    Cancel { request_id: RequestId },
}

/// Handle to the request engine.
///
/// Requests run on a dedicated thread driving a current-thread tokio runtime,
/// so they interleave cooperatively. Dropping the handle cancels whatever is
/// still in flight and stops the thread.
pub struct EngineHandle {
    cmd_tx: UnboundedSender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> io::Result<(Self, mpsc::Receiver<EngineEvent>)> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn Fetcher>,
    ) -> io::Result<(Self, mpsc::Receiver<EngineEvent>)> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::Builder::new()
            .name("stories-engine".to_string())
            .spawn(move || runtime.block_on(run_engine(fetcher, cmd_rx, event_tx)))?;

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn fetch(&self, request_id: RequestId, url: impl Into<String>) {
        self.send(EngineCommand::Fetch {
            request_id,
            url: url.into(),
        });
    }

    pub fn cancel(&self, request_id: RequestId) {
        self.send(EngineCommand::Cancel { request_id });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            stories_error!("Engine thread is gone; command dropped");
        }
    }
}

async fn run_engine(
    fetcher: Arc<dyn Fetcher>,
    mut cmd_rx: UnboundedReceiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let mut in_flight: HashMap<RequestId, CancellationToken> = HashMap::new();
    let (done_tx, mut done_rx) = unbounded_channel::<RequestId>();

    loop {
        tokio::select! {
            command = cmd_rx.recv() => match command {
                Some(EngineCommand::Fetch { request_id, url }) => {
                    let token = CancellationToken::new();
                    in_flight.insert(request_id, token.clone());
                    tokio::spawn(run_request(
                        fetcher.clone(),
                        request_id,
                        url,
                        token,
                        event_tx.clone(),
                        done_tx.clone(),
                    ));
                }
                Some(EngineCommand::Cancel { request_id }) => {
                    if let Some(token) = in_flight.remove(&request_id) {
                        token.cancel();
                    }
                }
                None => break,
            },
            Some(request_id) = done_rx.recv() => {
                in_flight.remove(&request_id);
            }
        }
    }

    for token in in_flight.into_values() {
        token.cancel();
    }
}

async fn run_request(
    fetcher: Arc<dyn Fetcher>,
    request_id: RequestId,
    url: String,
    token: CancellationToken,
    event_tx: mpsc::Sender<EngineEvent>,
    done_tx: UnboundedSender<RequestId>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            stories_debug!("Request {} cancelled", request_id);
        }
        result = fetcher.fetch(&url) => {
            if let Err(err) = &result {
                stories_warn!("Request {} failed: {}", request_id, err);
            }
            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
        }
    }
    let _ = done_tx.send(request_id);
}
