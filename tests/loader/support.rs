//! Test transport: replies are scripted per call and released on demand.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use catalog_loader::{CatalogLoader, LoaderConfig, RawResponse, Transport, TransportError};
use tokio::sync::oneshot;

pub const ENDPOINT: &str = "https://catalog.test/meals.json";

type Reply = Result<RawResponse, TransportError>;

/// A transport whose calls wait until the test releases a reply.
///
/// Each `get` takes the next queued gate in call order. Clones share the queue.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    gates: Arc<Mutex<VecDeque<oneshot::Receiver<Reply>>>>,
    calls: Arc<AtomicUsize>,
    urls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply slot for the next call.
    pub fn expect(&self) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        Gate(tx)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        let gate = self.gates.lock().unwrap().pop_front();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError::new("gate dropped"))),
            None => Err(TransportError::new("no scripted reply")),
        }
    }
}

/// Releases one pending call.
pub struct Gate(oneshot::Sender<Reply>);

impl Gate {
    pub fn respond(self, status: u16, body: &str) {
        let _ = self.0.send(Ok(RawResponse::new(status, body)));
    }

    pub fn ok(self, body: &str) {
        self.respond(200, body);
    }

    pub fn fail(self, message: &str) {
        let _ = self.0.send(Err(TransportError::new(message)));
    }
}

pub fn scripted_loader() -> (CatalogLoader<ScriptedTransport>, ScriptedTransport) {
    let transport = ScriptedTransport::new();
    let loader = CatalogLoader::with_transport(
        transport.clone(),
        LoaderConfig::new().with_endpoint(ENDPOINT),
    );
    (loader, transport)
}

/// Give spawned fetch tasks a chance to run to completion.
///
/// Tests run on the current-thread runtime, so yielding hands the thread to
/// every task that is ready; a scripted fetch never waits on anything else.
pub async fn let_tasks_run() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
