use super::*;

fn two_stop(a: Rgba8, b: Rgba8) -> Vec<ColorStop> {
    vec![ColorStop::new(0.0, a), ColorStop::new(1.0, b)]
}

#[test]
fn linear_gradient_pads_beyond_ends() {
    let g = LinearGradient {
        start: Point::new(0.0, 0.0),
        end: Point::new(10.0, 0.0),
        stops: two_stop(Rgba8::rgb(255, 0, 0), Rgba8::rgb(0, 0, 255)),
    };
    assert_eq!(g.sample(Point::new(-5.0, 3.0)), Rgba8::rgb(255, 0, 0).premul());
    assert_eq!(g.sample(Point::new(50.0, -3.0)), Rgba8::rgb(0, 0, 255).premul());
    let mid = g.sample(Point::new(5.0, 100.0));
    assert_eq!(mid.to_array(), [128, 0, 128, 255]);
}

#[test]
fn radial_gradient_fades_to_edge() {
    let g = RadialGradient {
        center: Point::new(10.0, 10.0),
        radius: 4.0,
        stops: vec![
            ColorStop::new(0.0, Rgba8::WHITE),
            ColorStop::new(1.0, Rgba8::TRANSPARENT),
        ],
    };
    assert_eq!(g.sample(Point::new(10.0, 10.0)).a, 255);
    assert_eq!(g.sample(Point::new(14.0, 10.0)).a, 0);
    assert_eq!(g.sample(Point::new(30.0, 30.0)).a, 0);
    let half = g.sample(Point::new(12.0, 10.0));
    assert!((126..=129).contains(&half.a));
}

#[test]
fn degenerate_inputs_do_not_panic() {
    assert_eq!(sample_stops(&[], 0.5), Rgba8Premul::transparent());
    let zero_len = LinearGradient {
        start: Point::new(1.0, 1.0),
        end: Point::new(1.0, 1.0),
        stops: two_stop(Rgba8::WHITE, Rgba8::TRANSPARENT),
    };
    assert_eq!(zero_len.sample(Point::new(9.0, 9.0)), Rgba8::WHITE.premul());
    let zero_radius = RadialGradient {
        center: Point::ZERO,
        radius: 0.0,
        stops: two_stop(Rgba8::WHITE, Rgba8::TRANSPARENT),
    };
    assert_eq!(zero_radius.sample(Point::ZERO), Rgba8Premul::transparent());
}

#[test]
fn solid_paint_samples_premultiplied() {
    let p = Paint::Solid(Rgba8::new(200, 100, 0, 0));
    assert_eq!(p.sample(Point::ZERO), Rgba8Premul::transparent());
}
