use super::*;

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 1,
        fps: Fps::new(30, 1).unwrap(),
        music: None,
    }
}

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![0; 8],
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_keeps_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame()).unwrap();
    sink.push_frame(FrameIndex(1), &frame()).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.frames().len(), 2);
    assert!(sink.is_ended());
    assert_eq!(sink.config().map(|c| c.width), Some(2));
}

#[test]
fn in_memory_sink_rejects_out_of_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(3), &frame()).unwrap();
    let err = sink.push_frame(FrameIndex(3), &frame()).unwrap_err();
    assert!(matches!(err, BouquetError::Encode(_)));
}

#[test]
fn begin_resets_previous_capture() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame()).unwrap();
    sink.begin(cfg()).unwrap();
    assert!(sink.frames().is_empty());
}

#[test]
fn music_volume_is_clamped() {
    assert_eq!(MusicInput::new("a.mp3", 1.5).volume(), 1.0);
    assert_eq!(MusicInput::new("a.mp3", -0.2).volume(), 0.0);
    assert_eq!(MusicInput::new("a.mp3", f64::NAN).volume(), DEFAULT_VOLUME);
    assert_eq!(MusicInput::new("a.mp3", 0.35).volume(), 0.35);
}
