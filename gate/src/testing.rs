//! Test doubles shared by the pipeline and admin API tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    ApiConfig, MemoryStore, Navigator, Pipeline, ProgressCounter, ProgressIndicator, RequestContext, Response,
    Transport, TransportError,
};

/// Replays scripted outcomes in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<Response, TransportError>>>,
    pending: Mutex<VecDeque<futures::channel::oneshot::Receiver<Response>>>,
    pub sent: Mutex<Vec<RequestContext>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: Value) -> &Self {
        self.outcomes.lock().unwrap().push_back(Ok(Response::new(status, body)));
        self
    }

    pub fn fail(&self, err: TransportError) -> &Self {
        self.outcomes.lock().unwrap().push_back(Err(err));
        self
    }

    /// Queue a response the test completes later through the returned sender.
    pub fn defer(&self) -> futures::channel::oneshot::Sender<Response> {
        let (tx, rx) = futures::channel::oneshot::channel();
        self.pending.lock().unwrap().push_back(rx);
        tx
    }

    pub fn sent(&self) -> Vec<RequestContext> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> RequestContext {
        self.sent().pop().expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: RequestContext) -> Result<Response, TransportError> {
        self.sent.lock().unwrap().push(request);
        let deferred = self.pending.lock().unwrap().pop_front();
        if let Some(rx) = deferred {
            return rx.await.map_err(|_| TransportError::Network("canceled".to_owned()));
        }
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted outcome".to_owned())))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn force_navigate(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_owned());
    }
}

/// Counts raw start/done signals alongside the reference count.
#[derive(Default)]
pub struct RecordingProgress {
    pub counter: ProgressCounter,
    pub starts: AtomicUsize,
    pub dones: AtomicUsize,
}

impl RecordingProgress {
    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn dones(&self) -> usize {
        self.dones.load(Ordering::SeqCst)
    }
}

impl ProgressIndicator for RecordingProgress {
    fn start(&self) {
        self.starts.fetch_add(1, Ordering::SeqCst);
        self.counter.start();
    }

    fn done(&self) {
        self.dones.fetch_add(1, Ordering::SeqCst);
        self.counter.done();
    }
}

/// A pipeline over scripted collaborators, with handles for assertions.
pub struct Harness {
    pub pipeline: Pipeline<ScriptedTransport>,
    pub store: Arc<MemoryStore>,
    pub progress: Arc<RecordingProgress>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new(token: Option<&str>) -> Self {
        let store = Arc::new(token.map_or_else(MemoryStore::new, MemoryStore::with_token));
        let progress = Arc::new(RecordingProgress::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let pipeline = Pipeline::new(
            ScriptedTransport::default(),
            store.clone(),
            progress.clone(),
            navigator.clone(),
            ApiConfig::default(),
        );
        Self { pipeline, store, progress, navigator }
    }

    pub fn transport(&self) -> &ScriptedTransport {
        self.pipeline.transport()
    }
}
