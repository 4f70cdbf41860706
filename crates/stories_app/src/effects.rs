use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use stories_core::{Effect, FetchOutcome, Msg};
use stories_engine::{EngineEvent, EngineHandle, Fetcher, KeyValueStore, PersistedField};
use stories_logging::{stories_debug, stories_info};

use crate::app::LoopEvent;

/// Executes core effects: term persistence inline, requests on the engine.
pub struct EffectRunner<S> {
    engine: EngineHandle,
    term: PersistedField<S>,
}

impl<S: KeyValueStore> EffectRunner<S> {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        term: PersistedField<S>,
        loop_tx: mpsc::Sender<LoopEvent>,
    ) -> io::Result<Self> {
        let (engine, events) = EngineHandle::with_fetcher(fetcher)?;
        spawn_event_forwarder(events, loop_tx)?;
        Ok(Self { engine, term })
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PersistTerm { value } => {
                    stories_debug!("Persisting {} = {:?}", self.term.key(), value);
                    self.term.set(value);
                }
                Effect::Fetch { request_id, url } => {
                    stories_info!("Fetch request_id={} url={}", request_id, url);
                    self.engine.fetch(request_id, url);
                }
                Effect::CancelFetch { request_id } => {
                    stories_info!("Cancel request_id={}", request_id);
                    self.engine.cancel(request_id);
                }
            }
        }
    }

    #[cfg(test)]
    pub fn term(&self) -> &PersistedField<S> {
        &self.term
    }
}

fn spawn_event_forwarder(
    events: mpsc::Receiver<EngineEvent>,
    loop_tx: mpsc::Sender<LoopEvent>,
) -> io::Result<()> {
    thread::Builder::new()
        .name("stories-events".to_string())
        .spawn(move || {
            for event in events {
                let msg = match event {
                    EngineEvent::FetchCompleted { request_id, result } => Msg::FetchCompleted {
                        request_id,
                        outcome: match result {
                            Ok(items) => FetchOutcome::Success(items),
                            Err(_) => FetchOutcome::Failure,
                        },
                    },
                };
                if loop_tx.send(LoopEvent::Engine(msg)).is_err() {
                    break;
                }
            }
        })?;
    Ok(())
}
