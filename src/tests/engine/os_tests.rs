//! End-to-end runs against the real filesystem.

use std::fs;
use std::sync::Arc;

use crate::error::TeeError;
use crate::io::RecordingProcessControl;
use crate::{Options, TeeBuilder, TeeEngine};

fn engine(options: Options) -> TeeEngine {
    TeeBuilder::from_options(options)
        .with_process_control(Arc::new(RecordingProcessControl::new()))
        .build()
}

#[test]
fn numbered_files_on_disk_hold_the_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("capture");
    let input = b"line one\nline two\n";

    let mut primary: Vec<u8> = Vec::new();
    let report = engine(Options::new().with_target(&target).with_target(&target))
        .run(&mut primary, &mut &input[..])
        .expect("run succeeds");

    assert!(report.is_clean());
    assert_eq!(primary, input);
    assert_eq!(fs::read(dir.path().join("capture.0")).unwrap(), input);
    assert_eq!(fs::read(dir.path().join("capture.1")).unwrap(), input);
}

#[test]
fn sequential_runs_increment_the_counter() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("run");

    for n in 0..3 {
        let report = engine(Options::new().with_target(&target))
            .run(&mut Vec::<u8>::new(), &mut &b"x"[..])
            .expect("run succeeds");
        assert_eq!(report.paths, vec![dir.path().join(format!("run.{n}"))]);
    }
}

#[test]
fn append_keeps_prior_contents() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("journal.txt");
    fs::write(&target, b"prefix\n").unwrap();

    engine(Options::new().with_target(&target).with_append(true))
        .run(&mut Vec::<u8>::new(), &mut &b"suffix\n"[..])
        .expect("run succeeds");

    assert_eq!(fs::read_to_string(&target).unwrap(), "prefix\nsuffix\n");
}

#[test]
fn append_creates_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("new.txt");

    engine(Options::new().with_target(&target).with_append(true))
        .run(&mut Vec::<u8>::new(), &mut &b"hello"[..])
        .expect("run succeeds");

    assert_eq!(fs::read(&target).unwrap(), b"hello");
}

#[test]
fn timestamped_file_name_has_no_colon() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("snap");

    let report = engine(Options::new().with_target(&target).with_timestamp(true))
        .run(&mut Vec::<u8>::new(), &mut &b"t"[..])
        .expect("run succeeds");

    let name = report.paths[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("snap."), "{name}");
    assert!(!name.contains(':'), "{name}");
    assert_eq!(fs::read(&report.paths[0]).unwrap(), b"t");
}

#[test]
fn unopenable_target_leaves_later_targets_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let locked = dir.path().join("no-such-dir").join("locked.txt");
    let out = dir.path().join("out.txt");

    let err = engine(
        Options::new()
            .with_append(true)
            .with_target(&locked)
            .with_target(&out),
    )
    .run(&mut Vec::<u8>::new(), &mut &b"payload"[..])
    .expect_err("open must fail");

    assert!(matches!(err, TeeError::Open { ref path, .. } if path == &locked));
    assert!(!out.exists());
}
