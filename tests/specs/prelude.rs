//! Shared helpers for worker specs

pub use beacon_adapters::{
    Detection, FakeDetector, FakeDiagnostics, FakeLoader, GrayscaleLoader, Point,
};
pub use beacon_core::{FakeClock, Request, TagDescriptor};
pub use beacon_worker::{spawn, Dispatcher, WorkerConfig, WorkerError, WorkerHandle};
pub use serde_json::{json, Value};

/// A host talking to one worker context
pub struct Host {
    handle: WorkerHandle,
    pub diagnostics: FakeDiagnostics,
}

impl Host {
    /// Start a worker backed by `loader`
    pub fn start(loader: &FakeLoader) -> Self {
        let diagnostics = FakeDiagnostics::new();
        let dispatcher = Dispatcher::new(loader.clone(), diagnostics.clone(), FakeClock::new());
        Self {
            handle: spawn(dispatcher, &WorkerConfig::default()),
            diagnostics,
        }
    }

    /// Start a worker backed by the grayscale engine around `detector`
    pub fn start_grayscale(detector: &FakeDetector) -> Self {
        let detector = detector.clone();
        let loader = GrayscaleLoader::new(move || {
            Ok::<_, beacon_adapters::EngineError>(detector.clone())
        });
        let diagnostics = FakeDiagnostics::new();
        let dispatcher = Dispatcher::new(loader, diagnostics.clone(), FakeClock::new());
        Self {
            handle: spawn(dispatcher, &WorkerConfig::default()),
            diagnostics,
        }
    }

    /// Post a message given as JSON, the way a host would write it
    pub async fn send(&self, message: Value) {
        let request: Request = serde_json::from_value(message).unwrap();
        self.handle.post(request).await.unwrap();
    }

    pub async fn next(&mut self) -> Option<Value> {
        let reply = self.handle.recv().await?;
        Some(serde_json::to_value(reply).unwrap())
    }

    /// Stop sending, then collect every remaining reply as JSON
    pub async fn finish(mut self) -> (Vec<Value>, Result<(), WorkerError>) {
        self.handle.close();
        let mut replies = Vec::new();
        while let Some(reply) = self.handle.recv().await {
            replies.push(serde_json::to_value(reply).unwrap());
        }
        (replies, self.handle.join().await)
    }
}

pub fn init_message(codes: &[&str], print_performance: bool) -> Value {
    json!({
        "type": "init",
        "codes": codes,
        "width": 640,
        "height": 480,
        "options": { "printPerformance": print_performance }
    })
}

pub fn process_message(frame: &[u8]) -> Value {
    json!({ "type": "process", "imagedata": frame })
}

/// Frame bytes the stub engine recognizes as containing one marker
pub fn frame_with_one_marker() -> Vec<u8> {
    vec![255, 0, 0, 255, 0, 0, 0, 255]
}

pub fn marker(id: &str) -> Value {
    json!({
        "id": id,
        "corners": [
            { "x": 12.0, "y": 40.5 },
            { "x": 52.0, "y": 40.5 },
            { "x": 52.0, "y": 80.5 },
            { "x": 12.0, "y": 80.5 }
        ]
    })
}
