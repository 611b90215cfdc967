//! Stream transport specs
//!
//! Verify a host speaking length-prefixed JSON over a byte stream.

use crate::prelude::*;
use similar_asserts::assert_eq;
use beacon_core::protocol::{read_message, write_message};
use beacon_core::ProtocolError;
use beacon_worker::serve;

#[tokio::test]
async fn host_session_over_a_pipe() {
    let loader = FakeLoader::new();
    loader.set_tags_for(
        &frame_with_one_marker(),
        vec![TagDescriptor::new(marker("A"))],
    );
    let mut dispatcher = Dispatcher::new(loader, FakeDiagnostics::new(), FakeClock::new());

    let (host, worker) = tokio::io::duplex(4096);
    let (mut worker_read, mut worker_write) = tokio::io::split(worker);
    let (mut host_read, mut host_write) = tokio::io::split(host);

    let server = tokio::spawn(async move {
        serve(
            &mut dispatcher,
            &mut worker_read,
            &mut worker_write,
            &WorkerConfig::default(),
        )
        .await
    });

    for message in [
        init_message(&["A"], false),
        process_message(&frame_with_one_marker()),
    ] {
        let body = serde_json::to_vec(&message).unwrap();
        write_message(&mut host_write, &body).await.unwrap();
    }

    let mut replies = Vec::new();
    for _ in 0..2 {
        let body = read_message(&mut host_read, 4096).await.unwrap();
        replies.push(serde_json::from_slice::<Value>(&body).unwrap());
    }

    assert_eq!(
        replies,
        vec![
            json!({ "type": "loaded" }),
            json!({ "type": "result", "tags": [marker("A")] }),
        ]
    );

    drop(host_write);
    drop(host_read);
    assert!(server.await.unwrap().is_ok());
}

#[tokio::test]
async fn configured_size_limit_rejects_oversized_messages() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"max_message_bytes = 64\n").unwrap();
    let config = WorkerConfig::load(Some(file.path())).unwrap();

    let loader = FakeLoader::new();
    let mut dispatcher = Dispatcher::new(loader.clone(), FakeDiagnostics::new(), FakeClock::new());

    let body = serde_json::to_vec(&init_message(&["A", "B", "C", "D", "E"], true)).unwrap();
    assert!(body.len() > 64);
    let mut input = Vec::new();
    write_message(&mut input, &body).await.unwrap();

    let mut reader = std::io::Cursor::new(input);
    let mut output = Vec::new();
    let result = serve(&mut dispatcher, &mut reader, &mut output, &config).await;

    assert!(matches!(
        result,
        Err(WorkerError::Protocol(ProtocolError::MessageTooLarge { max: 64, .. }))
    ));
    assert!(output.is_empty());
    assert_eq!(loader.load_count(), 0);
}
