use super::*;
use crate::foundation::rng::Rng64;
use crate::surface::RecordingSurface;

/// Always returns the same sample.
struct Fixed(f64);

impl RandomSource for Fixed {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

fn tick(ms: f64) -> FrameTick {
    FrameTick::new((ms / 16.0) as u64, ms)
}

fn mounted(canvas: Canvas) -> ParticlesEffect {
    let mut fx = ParticlesEffect::new(ParticleParams::default()).unwrap();
    fx.reset(canvas, &mut Rng64::new(0));
    fx
}

#[test]
fn field_colors() {
    assert_eq!(FieldKind::Name.color(), Rgba8::from_hex("#0070f3").unwrap());
    assert_eq!(FieldKind::Email.color(), Rgba8::from_hex("#6d28d9").unwrap());
    assert_eq!(FieldKind::Subject.color(), Rgba8::from_hex("#00c58e").unwrap());
    assert_eq!(FieldKind::Message.color(), Rgba8::from_hex("#ff4081").unwrap());
}

#[test]
fn spawn_inside_lower_half_of_anchor() {
    let anchor = Rect::new(10.0, 20.0, 110.0, 60.0);
    let p = spawn_particle(
        Canvas::new(800, 600),
        FieldKind::Subject,
        Some(anchor),
        42.0,
        &mut Fixed(0.5),
    )
    .unwrap();
    assert_eq!(p.pos, Point::new(60.0, 50.0));
    assert_eq!(p.size, 7.0);
    assert_eq!(p.velocity, Vec2::ZERO);
    assert_eq!(p.opacity, 0.5);
    assert_eq!(p.lifetime_ms, 3500.0);
    assert_eq!(p.born_ms, 42.0);
    assert_eq!(p.color, FieldKind::Subject.color());
}

#[test]
fn spawn_without_anchor_uses_center() {
    let p = spawn_particle(
        Canvas::new(300, 100),
        FieldKind::Name,
        None,
        0.0,
        &mut Fixed(0.0),
    )
    .unwrap();
    assert_eq!(p.pos, Point::new(150.0, 50.0));
    assert_eq!(p.velocity, Vec2::new(-0.75, -0.75));
}

#[test]
fn spawn_ranges_hold() {
    let mut rng = Rng64::new(9);
    let anchor = Some(Rect::new(0.0, 100.0, 200.0, 140.0));
    for _ in 0..500 {
        let p = spawn_particle(Canvas::new(400, 400), FieldKind::Email, anchor, 0.0, &mut rng)
            .unwrap();
        assert!((4.0..10.0).contains(&p.size));
        assert!((0.2..0.8).contains(&p.opacity));
        assert!((2000.0..5000.0).contains(&p.lifetime_ms));
        assert!(p.velocity.x.abs() <= 0.75 && p.velocity.y.abs() <= 0.75);
        assert!((0.0..200.0).contains(&p.pos.x));
        assert!((120.0..140.0).contains(&p.pos.y));
    }
}

#[test]
fn empty_canvas_never_spawns() {
    assert!(spawn_particle(Canvas::new(0, 600), FieldKind::Name, None, 0.0, &mut Fixed(0.5)).is_none());

    let mut fx = mounted(Canvas::new(0, 0));
    fx.set_active_field(Some(FieldKind::Name), None);
    fx.step(tick(0.0), &mut Rng64::new(1));
    fx.step(tick(1000.0), &mut Rng64::new(1));
    assert!(fx.particles().is_empty());
}

#[test]
fn activation_bursts_then_spawns_on_the_clock() {
    let mut rng = Rng64::new(3);
    let mut fx = mounted(Canvas::new(800, 600));
    assert!(!fx.step(tick(0.0), &mut rng));

    fx.set_active_field(Some(FieldKind::Email), None);
    assert!(fx.step(tick(0.0), &mut rng));
    assert_eq!(fx.particles().len(), 5);
    fx.step(tick(100.0), &mut rng);
    assert_eq!(fx.particles().len(), 5);
    fx.step(tick(200.0), &mut rng);
    assert_eq!(fx.particles().len(), 6);
    // Ticks at 400 and 600 were both missed; only one spawn, next tick at 800.
    fx.step(tick(650.0), &mut rng);
    assert_eq!(fx.particles().len(), 7);
    fx.step(tick(799.0), &mut rng);
    assert_eq!(fx.particles().len(), 7);
    fx.step(tick(800.0), &mut rng);
    assert_eq!(fx.particles().len(), 8);
    assert!(
        fx.particles()
            .iter()
            .all(|p| p.color == FieldKind::Email.color())
    );
}

#[test]
fn long_frame_gap_does_not_replay_missed_spawns() {
    let mut rng = Rng64::new(8);
    let mut fx = mounted(Canvas::new(800, 600));
    fx.set_active_field(Some(FieldKind::Name), None);
    fx.step(tick(0.0), &mut rng);
    assert_eq!(fx.particles().len(), 5);

    // The burst expires during the gap; one tick's spawn replaces it.
    fx.step(tick(60_000.0), &mut rng);
    assert_eq!(fx.particles().len(), 1);
    fx.step(tick(60_100.0), &mut rng);
    assert_eq!(fx.particles().len(), 1);
    fx.step(tick(60_200.0), &mut rng);
    assert_eq!(fx.particles().len(), 2);

    fx.step(tick(1.0e15), &mut rng);
    assert!(fx.particles().len() <= 1);
}

#[test]
fn constructor_rejects_bad_params() {
    let bad = [
        ParticleParams {
            max_speed: -1.0,
            ..ParticleParams::default()
        },
        ParticleParams {
            max_speed: f64::NAN,
            ..ParticleParams::default()
        },
        ParticleParams {
            spawn_interval_ms: 0.0,
            ..ParticleParams::default()
        },
        ParticleParams {
            jitter: f64::INFINITY,
            ..ParticleParams::default()
        },
    ];
    for params in bad {
        assert!(ParticlesEffect::new(params).is_err(), "{params:?}");
    }
}

#[test]
fn switching_fields_restarts_the_clock() {
    let mut rng = Rng64::new(4);
    let mut fx = mounted(Canvas::new(800, 600));
    fx.set_active_field(Some(FieldKind::Name), None);
    fx.step(tick(0.0), &mut rng);
    fx.step(tick(150.0), &mut rng);
    assert_eq!(fx.particles().len(), 5);

    fx.set_active_field(Some(FieldKind::Message), None);
    assert_eq!(fx.active_field(), Some(FieldKind::Message));
    fx.step(tick(160.0), &mut rng);
    assert_eq!(fx.particles().len(), 10);
    // Old clock would have fired at 200; the new one fires at 360.
    fx.step(tick(300.0), &mut rng);
    assert_eq!(fx.particles().len(), 10);
    fx.step(tick(360.0), &mut rng);
    assert_eq!(fx.particles().len(), 11);
}

#[test]
fn deactivation_lets_particles_expire_then_settles() {
    let mut rng = Rng64::new(5);
    let mut fx = mounted(Canvas::new(800, 600));
    fx.set_active_field(Some(FieldKind::Name), None);
    fx.step(tick(0.0), &mut rng);
    fx.set_active_field(None, None);

    assert!(fx.step(tick(1000.0), &mut rng));
    assert_eq!(fx.particles().len(), 5);
    assert!(fx.step(tick(1999.0), &mut rng));
    assert!(!fx.step(tick(5000.0), &mut rng));
    assert!(fx.particles().is_empty());
}

#[test]
fn drift_bounces_off_far_edge() {
    let mut p = spawn_particle(Canvas::new(800, 600), FieldKind::Name, None, 0.0, &mut Fixed(0.5))
        .unwrap();
    p.pos = Point::new(799.5, 300.0);
    p.velocity = Vec2::new(1.0, 0.0);
    let params = ParticleParams {
        jitter: 0.0,
        ..ParticleParams::default()
    };
    drift(&mut p, Canvas::new(800, 600), &params, &mut Fixed(0.9));
    assert_eq!(p.pos, Point::new(800.5, 300.0));
    assert_eq!(p.velocity, Vec2::new(-1.0, 0.0));
}

#[test]
fn drift_bounces_at_zero_and_clamps_speed() {
    let mut p = spawn_particle(Canvas::new(800, 600), FieldKind::Name, None, 0.0, &mut Fixed(0.5))
        .unwrap();
    p.pos = Point::new(400.0, 1.0);
    p.velocity = Vec2::new(5.0, -1.0);
    drift(&mut p, Canvas::new(800, 600), &ParticleParams::default(), &mut Fixed(0.5));
    assert_eq!(p.pos, Point::new(405.0, 0.0));
    assert_eq!(p.velocity, Vec2::new(2.0, 1.0));
}

#[test]
fn resize_keeps_particles_reset_clears_them() {
    let mut rng = Rng64::new(6);
    let mut fx = mounted(Canvas::new(800, 600));
    fx.set_active_field(Some(FieldKind::Name), None);
    fx.step(tick(0.0), &mut rng);
    fx.resize(Canvas::new(100, 100), &mut rng);
    assert_eq!(fx.particles().len(), 5);
    fx.reset(Canvas::new(100, 100), &mut rng);
    assert!(fx.particles().is_empty());
    // Still active: the next step bursts again.
    fx.step(tick(20.0), &mut rng);
    assert_eq!(fx.particles().len(), 5);
}

#[test]
fn pulse_breathes_over_two_seconds() {
    assert_eq!(Particle::pulse(0.0), (1.0, 1.0));
    assert_eq!(Particle::pulse(1000.0), (1.2, 1.5));
    assert_eq!(Particle::pulse(2000.0), (1.0, 1.0));
    let (s, f) = Particle::pulse(500.0);
    assert!(s > 1.0 && s < 1.2 && f > 1.0 && f < 1.5);
}

#[test]
fn paint_fills_one_disc_per_particle() {
    let mut rng = Rng64::new(7);
    let mut fx = mounted(Canvas::new(800, 600));
    fx.set_active_field(Some(FieldKind::Message), None);
    fx.step(tick(0.0), &mut rng);

    let mut s = RecordingSurface::new(Canvas::new(800, 600));
    fx.paint(&mut s).unwrap();
    let fills: Vec<_> = s.fills().collect();
    assert_eq!(fills.len(), 5);
    for ((path, paint), p) in fills.iter().zip(fx.particles()) {
        let Paint::Solid(c) = paint else {
            panic!("particles are solid discs");
        };
        assert_eq!((c.r, c.g, c.b), (0xff, 0x40, 0x81));
        assert_eq!(*c, p.color.with_alpha_f(p.opacity));
        let bb = kurbo::Shape::bounding_box(*path);
        assert!((bb.width() - p.size).abs() < 1e-6);
    }
}
