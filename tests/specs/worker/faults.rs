//! Engine fault specs
//!
//! Verify that engine faults end the worker without partial replies.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[tokio::test]
async fn load_fault_ends_worker_before_loaded() {
    let loader = FakeLoader::new();
    loader.fail_load("module failed to instantiate");
    let host = Host::start(&loader);

    host.send(init_message(&["A"], false)).await;

    let (replies, exit) = host.finish().await;
    assert!(replies.is_empty());
    assert!(matches!(exit, Err(WorkerError::Dispatch(_))));
}

#[tokio::test]
async fn detect_fault_ends_worker_without_result() {
    let loader = FakeLoader::new();
    loader.fail_detect("out of bounds read");
    let host = Host::start(&loader);

    host.send(init_message(&["A"], false)).await;
    host.send(process_message(&[0; 4])).await;

    let (replies, exit) = host.finish().await;
    assert_eq!(replies, vec![json!({ "type": "loaded" })]);
    assert!(matches!(exit, Err(WorkerError::Dispatch(_))));
}

#[tokio::test]
async fn invalid_code_fails_grayscale_init() {
    let detector = FakeDetector::new();
    let host = Host::start_grayscale(&detector);

    host.send(init_message(&["not-a-code"], false)).await;

    let (replies, exit) = host.finish().await;
    assert!(replies.is_empty());
    assert!(exit.is_err());
}
