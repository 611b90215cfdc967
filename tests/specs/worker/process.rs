//! Frame processing specs
//!
//! Verify `process` → `result` contents, ordering and diagnostics.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[tokio::test]
async fn result_carries_engine_tags_verbatim() {
    let loader = FakeLoader::new();
    loader.set_tags_for(
        &frame_with_one_marker(),
        vec![TagDescriptor::new(marker("A"))],
    );
    let mut host = Host::start(&loader);

    host.send(init_message(&["A"], false)).await;
    assert_eq!(host.next().await, Some(json!({ "type": "loaded" })));

    host.send(process_message(&frame_with_one_marker())).await;
    assert_eq!(
        host.next().await,
        Some(json!({ "type": "result", "tags": [marker("A")] }))
    );
}

#[tokio::test]
async fn results_follow_request_order() {
    let loader = FakeLoader::new();
    let frames: Vec<Vec<u8>> = (0u8..5).map(|i| vec![i; 4]).collect();
    for (i, frame) in frames.iter().enumerate() {
        loader.set_tags_for(frame, vec![TagDescriptor::new(json!({ "seq": i }))]);
    }
    let host = Host::start(&loader);

    host.send(init_message(&["A"], false)).await;
    for frame in &frames {
        host.send(process_message(frame)).await;
    }

    let (replies, _) = host.finish().await;
    let expected: Vec<Value> = std::iter::once(json!({ "type": "loaded" }))
        .chain((0..5).map(|i| json!({ "type": "result", "tags": [{ "seq": i }] })))
        .collect();
    assert_eq!(replies, expected);
}

#[tokio::test]
async fn multiple_tags_keep_detector_order() {
    let loader = FakeLoader::new();
    loader.set_default_tags(vec![
        TagDescriptor::new(marker("C")),
        TagDescriptor::new(marker("A")),
        TagDescriptor::new(marker("B")),
    ]);
    let host = Host::start(&loader);

    host.send(init_message(&["A", "B", "C"], false)).await;
    host.send(process_message(&[0; 4])).await;

    let (replies, _) = host.finish().await;
    assert_eq!(
        replies[1],
        json!({ "type": "result", "tags": [marker("C"), marker("A"), marker("B")] })
    );
}

#[tokio::test]
async fn identical_frames_yield_identical_results() {
    let loader = FakeLoader::new();
    loader.set_tags_for(
        &frame_with_one_marker(),
        vec![TagDescriptor::new(marker("A"))],
    );
    let host = Host::start(&loader);

    host.send(init_message(&["A"], false)).await;
    host.send(process_message(&frame_with_one_marker())).await;
    host.send(process_message(&frame_with_one_marker())).await;

    let (replies, _) = host.finish().await;
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[1], replies[2]);
}

#[tokio::test]
async fn print_performance_only_adds_timing_lines() {
    let run = |print_performance: bool| async move {
        let loader = FakeLoader::new();
        loader.set_default_tags(vec![TagDescriptor::new(marker("A"))]);
        let host = Host::start(&loader);
        let diagnostics = host.diagnostics.clone();

        host.send(init_message(&["A"], print_performance)).await;
        host.send(process_message(&[0; 4])).await;
        host.send(process_message(&[1; 4])).await;

        let (replies, _) = host.finish().await;
        (replies, diagnostics.lines())
    };

    let (quiet_replies, quiet_lines) = run(false).await;
    let (timed_replies, timed_lines) = run(true).await;

    assert_eq!(quiet_replies, timed_replies);
    assert!(quiet_lines.is_empty());
    assert_eq!(
        timed_lines,
        vec![
            "[performance] Detect: 0".to_string(),
            "[performance] Detect: 0".to_string(),
        ]
    );
}

#[tokio::test]
async fn grayscale_engine_reports_detector_output() {
    let detector = FakeDetector::new();
    detector.set_detections(vec![Detection::new(
        b'A',
        [
            Point::new(1.0, 1.0),
            Point::new(3.0, 1.0),
            Point::new(3.0, 3.0),
            Point::new(1.0, 3.0),
        ],
        Point::new(2.0, 2.0),
    )]);
    let host = Host::start_grayscale(&detector);

    host.send(init_message(&["A"], false)).await;
    host.send(process_message(&frame_with_one_marker())).await;

    let (replies, exit) = host.finish().await;
    assert!(exit.is_ok());
    assert_eq!(
        replies,
        vec![
            json!({ "type": "loaded" }),
            json!({
                "type": "result",
                "tags": [{
                    "code": 65,
                    "corners": [
                        { "x": 1.0, "y": 1.0 },
                        { "x": 3.0, "y": 1.0 },
                        { "x": 3.0, "y": 3.0 },
                        { "x": 1.0, "y": 3.0 }
                    ],
                    "center": { "x": 2.0, "y": 2.0 }
                }]
            }),
        ]
    );
}
