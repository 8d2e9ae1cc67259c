use super::*;
use crate::foundation::core::Fps;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("bouquet-png-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::new(30, 1).unwrap(),
        music: None,
    }
}

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 2,
        data: [[128, 0, 0, 128]; 4].concat(),
        premultiplied: true,
    }
}

#[test]
fn writes_numbered_pngs() {
    let dir = scratch_dir("numbered");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame()).unwrap();
    sink.push_frame(FrameIndex(1), &frame()).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    assert!(dir.join("frame_00000.png").is_file());
    assert!(dir.join("frame_00001.png").is_file());

    let img = image::open(dir.join("frame_00001.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn push_before_begin_fails() {
    let mut sink = PngSequenceSink::new(scratch_dir("unstarted"));
    let err = sink.push_frame(FrameIndex(0), &frame()).unwrap_err();
    assert!(matches!(err, BouquetError::Encode(_)));
}

#[test]
fn rejects_repeated_index() {
    let dir = scratch_dir("order");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(4), &frame()).unwrap();
    assert!(sink.push_frame(FrameIndex(2), &frame()).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}
