use super::*;

fn frame_2x1(premultiplied: bool) -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![128, 64, 0, 128, 9, 9, 9, 0],
        premultiplied,
    }
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let f = frame_2x1(true);
    assert_eq!(f.pixel(0, 0), Some([128, 64, 0, 128]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn unpremultiply_restores_straight_color() {
    let straight = frame_2x1(true).to_straight_rgba8();
    assert_eq!(&straight[..4], &[255, 128, 0, 128]);
    assert_eq!(&straight[4..], &[0, 0, 0, 0]);
}

#[test]
fn straight_frames_pass_through() {
    let f = frame_2x1(false);
    assert_eq!(f.to_straight_rgba8(), f.data);
}

#[test]
fn save_png_rejects_short_buffers() {
    let f = FrameRGBA {
        width: 4,
        height: 4,
        data: vec![0; 8],
        premultiplied: true,
    };
    let dir = std::env::temp_dir().join("glowfield_frame_unit");
    assert!(f.save_png(&dir.join("bad.png")).is_err());
}
