use super::*;

fn frame(w: u32, h: u32, rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: rgba.repeat((w * h) as usize),
        premultiplied: true,
    }
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::default(),
    }
}

#[test]
fn in_memory_sink_restarts_on_begin() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(2, 2, [0; 4])).unwrap();
    sink.end().unwrap();
    assert!(sink.ended());
    assert_eq!(sink.frames.len(), 1);

    sink.begin(cfg()).unwrap();
    assert!(sink.frames.is_empty());
    assert!(!sink.ended());
    assert_eq!(sink.config(), Some(cfg()));
}

#[test]
fn png_sequence_names_frames_by_index() {
    let dir = std::env::temp_dir().join(format!("glowfield_sink_unit_{}", std::process::id()));
    let mut sink = PngSequenceSink::new(&dir).with_prefix("blob_");
    assert_eq!(sink.frame_path(FrameIndex(7)), dir.join("blob_00007.png"));

    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(3), &frame(2, 2, [0, 0, 128, 128]))
        .unwrap();
    sink.push_frame(FrameIndex(4), &frame(2, 2, [0, 0, 0, 0]))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(
        sink.written(),
        &[dir.join("blob_00003.png"), dir.join("blob_00004.png")]
    );
    let img = image::open(&sink.written()[0]).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 128]);

    let _ = std::fs::remove_dir_all(&dir);
}
