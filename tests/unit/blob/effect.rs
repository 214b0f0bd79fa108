use super::*;
use crate::foundation::rng::Rng64;
use crate::surface::RecordingSurface;

#[test]
fn reset_builds_configured_point_count() {
    let mut fx = BlobEffect::new(BlobParams::default()).unwrap();
    fx.reset(Canvas::new(800, 600), &mut Rng64::new(1));
    assert_eq!(fx.points().len(), 10);
    assert_eq!(fx.canvas(), Canvas::new(800, 600));
}

#[test]
fn resize_replaces_the_whole_set() {
    let mut rng = Rng64::new(2);
    let mut fx = BlobEffect::new(BlobParams {
        count: 6,
        ..BlobParams::default()
    })
    .unwrap();
    fx.reset(Canvas::new(800, 600), &mut rng);
    let before = fx.points().to_vec();
    fx.resize(Canvas::new(200, 100), &mut rng);
    assert_eq!(fx.points().len(), 6);
    assert_ne!(fx.points(), before.as_slice());
    for p in fx.points() {
        assert!(p.origin.x < 200.0 && p.origin.y < 100.0);
    }
}

#[test]
fn step_moves_points_and_never_settles() {
    let mut rng = Rng64::new(3);
    let mut fx = BlobEffect::new(BlobParams::default()).unwrap();
    fx.reset(Canvas::new(300, 300), &mut rng);
    let before = fx.points().to_vec();
    assert!(fx.step(FrameTick::new(0, 0.0), &mut rng));
    assert_ne!(fx.points(), before.as_slice());
}

#[test]
fn paint_emits_one_blob_and_one_glow_per_point() {
    let mut fx = BlobEffect::new(BlobParams::default()).unwrap();
    fx.reset(Canvas::new(300, 300), &mut Rng64::new(4));
    let mut s = RecordingSurface::new(Canvas::new(300, 300));
    fx.paint(&mut s).unwrap();
    assert_eq!(s.fills().count(), 11);
}

#[test]
fn params_validation() {
    assert!(BlobParams::default().validate().is_ok());
    assert!(
        BlobParams {
            count: 0,
            ..BlobParams::default()
        }
        .validate()
        .is_err()
    );
    assert!(
        BlobEffect::new(BlobParams {
            physics: PhysicsParams {
                friction: 2.0,
                ..PhysicsParams::default()
            },
            ..BlobParams::default()
        })
        .is_err()
    );
}
