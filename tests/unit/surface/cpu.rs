use super::*;
use crate::surface::{ColorStop, LinearGradient, RadialGradient};

fn rect_path(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((x0, y0));
    p.line_to((x1, y0));
    p.line_to((x1, y1));
    p.line_to((x0, y1));
    p.close_path();
    p
}

#[test]
fn solid_fill_covers_interior_pixels() {
    let mut s = CpuSurface::new(Canvas::new(16, 16)).unwrap();
    s.clear();
    s.fill_path(&rect_path(0.0, 0.0, 8.0, 8.0), &Paint::Solid(Rgba8::rgb(255, 0, 0)))
        .unwrap();
    s.present().unwrap();

    let f = s.snapshot();
    assert_eq!(f.width, 16);
    assert_eq!(f.data.len(), 16 * 16 * 4);
    assert_eq!(f.pixel(3, 3), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(12, 12), Some([0, 0, 0, 0]));
}

#[test]
fn clear_color_fills_background() {
    let mut s = CpuSurface::new(Canvas::new(8, 8))
        .unwrap()
        .with_clear_rgba(Some([10, 20, 30, 255]));
    s.clear();
    s.present().unwrap();
    assert_eq!(s.snapshot().pixel(4, 4), Some([10, 20, 30, 255]));
}

#[test]
fn flat_gradient_fill_matches_stop_color() {
    let mut s = CpuSurface::new(Canvas::new(16, 16)).unwrap();
    let blue = Rgba8::rgb(0, 0, 255);
    let paint = Paint::Linear(LinearGradient {
        start: Point::new(0.0, 0.0),
        end: Point::new(16.0, 16.0),
        stops: vec![ColorStop::new(0.0, blue), ColorStop::new(1.0, blue)],
    });
    s.clear();
    s.fill_path(&rect_path(2.0, 2.0, 14.0, 14.0), &paint).unwrap();
    s.present().unwrap();
    assert_eq!(s.snapshot().pixel(8, 8), Some([0, 0, 255, 255]));
    assert_eq!(s.snapshot().pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn off_surface_gradient_is_skipped() {
    let mut s = CpuSurface::new(Canvas::new(8, 8)).unwrap();
    let paint = Paint::Radial(RadialGradient {
        center: Point::new(-50.0, -50.0),
        radius: 5.0,
        stops: vec![ColorStop::new(0.0, Rgba8::WHITE)],
    });
    s.clear();
    s.fill_path(&rect_path(-60.0, -60.0, -40.0, -40.0), &paint)
        .unwrap();
    s.present().unwrap();
    assert!(s.snapshot().data.iter().all(|&b| b == 0));
}

#[test]
fn resize_reallocates_and_rejects_oversize() {
    let mut s = CpuSurface::new(Canvas::new(8, 8)).unwrap();
    s.resize(Canvas::new(20, 10)).unwrap();
    assert_eq!(s.canvas(), Canvas::new(20, 10));
    assert_eq!(s.snapshot().data.len(), 20 * 10 * 4);
    assert!(s.resize(Canvas::new(100_000, 10)).is_err());
    assert_eq!(s.canvas(), Canvas::new(20, 10));
}

#[test]
fn stroke_rejects_bad_width() {
    let mut s = CpuSurface::new(Canvas::new(8, 8)).unwrap();
    s.clear();
    assert!(
        s.stroke_path(&rect_path(1.0, 1.0, 6.0, 6.0), Rgba8::WHITE, 0.0)
            .is_err()
    );
    assert!(
        s.stroke_path(&rect_path(1.0, 1.0, 6.0, 6.0), Rgba8::WHITE, 1.0)
            .is_ok()
    );
}
