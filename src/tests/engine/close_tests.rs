//! Close-phase behavior: every destination is closed once, failures are collected.

use std::path::PathBuf;
use std::sync::Arc;

use crate::io::{InMemoryFilesystem, RecordingProcessControl};
use crate::{Options, TeeBuilder, TeeEngine};

fn engine(options: Options, memfs: &InMemoryFilesystem) -> TeeEngine {
    TeeBuilder::from_options(options)
        .with_filesystem(Arc::new(memfs.clone()))
        .with_process_control(Arc::new(RecordingProcessControl::new()))
        .build()
}

#[test]
fn destinations_close_once_in_open_order() {
    let memfs = InMemoryFilesystem::new();
    let options = Options::new()
        .with_target("x")
        .with_target("y")
        .with_target("z");

    let report = engine(options, &memfs)
        .run(&mut Vec::<u8>::new(), &mut &b"data"[..])
        .expect("run succeeds");

    assert_eq!(memfs.opened(), report.paths);
    assert_eq!(memfs.closed(), report.paths);
}

#[test]
fn close_failure_does_not_stop_sibling_closes() {
    let memfs = InMemoryFilesystem::new().fail_close("first");
    let options = Options::new()
        .with_append(true)
        .with_target("first")
        .with_target("second");

    let mut primary: Vec<u8> = Vec::new();
    let report = engine(options, &memfs)
        .run(&mut primary, &mut &b"payload"[..])
        .expect("close failures are not fatal");

    assert!(!report.is_clean());
    assert_eq!(report.close_errors.len(), 1);
    assert_eq!(report.close_errors[0].path, PathBuf::from("first"));
    assert_eq!(
        memfs.closed(),
        vec![PathBuf::from("first"), PathBuf::from("second")]
    );
    // The copy completed before the close phase.
    assert_eq!(memfs.contents("first"), Some(b"payload".to_vec()));
    assert_eq!(memfs.contents("second"), Some(b"payload".to_vec()));
    assert_eq!(primary, b"payload");
}

#[test]
fn every_close_failure_is_reported_in_order() {
    let memfs = InMemoryFilesystem::new()
        .fail_close("a")
        .fail_close("c");
    let options = Options::new()
        .with_append(true)
        .with_target("a")
        .with_target("b")
        .with_target("c");

    let report = engine(options, &memfs)
        .run(&mut Vec::<u8>::new(), &mut &b"payload"[..])
        .expect("close failures are not fatal");

    let failed: Vec<PathBuf> = report.close_errors.iter().map(|e| e.path.clone()).collect();
    assert_eq!(failed, vec![PathBuf::from("a"), PathBuf::from("c")]);
}
