use std::path::PathBuf;

use tui_starfield::core::{Bounds, Frame, LoadError};
use tui_starfield::Config;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn bundled_frames_load_with_matching_size() {
    let config = Config {
        data_dir: data_dir(),
        ..Config::default()
    };

    let frames = config
        .frame_paths()
        .iter()
        .map(Frame::load)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].size(), Bounds::new(9, 5));
    assert_eq!(frames[0].size(), frames[1].size());
    assert_ne!(frames[0], frames[1]);
}

#[test]
fn missing_frame_is_reported_with_path() {
    let config = Config {
        data_dir: data_dir().join("missing"),
        ..Config::default()
    };
    let [first, _] = config.frame_paths();

    let err = Frame::load(&first).unwrap_err();
    let LoadError::Read { path, source } = &err;
    assert_eq!(path, &first);
    assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().contains("frame1.txt"));
}
