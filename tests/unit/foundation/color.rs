use super::*;

#[test]
fn hsl_primary_hues() {
    assert_eq!(hsl(0.0, 1.0, 0.5), Rgba8::rgb(255, 0, 0));
    assert_eq!(hsl(120.0, 1.0, 0.5), Rgba8::rgb(0, 255, 0));
    assert_eq!(hsl(240.0, 1.0, 0.5), Rgba8::rgb(0, 0, 255));
    assert_eq!(hsl(360.0, 1.0, 0.5), Rgba8::rgb(255, 0, 0));
}

#[test]
fn hsl_cyan_at_eighty_sixty() {
    // hsl(180, 80%, 60%) == rgb(71, 235, 235)
    assert_eq!(hsl(180.0, 0.8, 0.6), Rgba8::rgb(71, 235, 235));
}

#[test]
fn hex_parsing() {
    assert_eq!(Rgba8::from_hex("#0070f3").unwrap(), Rgba8::rgb(0, 112, 243));
    assert_eq!(
        Rgba8::from_hex("#ff408180").unwrap(),
        Rgba8::new(255, 64, 129, 128)
    );
    assert!(Rgba8::from_hex("0070f3").is_err());
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
}

#[test]
fn premul_scales_channels_by_alpha() {
    let p = Rgba8::new(255, 128, 0, 128).premul();
    assert_eq!(p.to_array(), [128, 64, 0, 128]);
    assert_eq!(Rgba8::TRANSPARENT.premul(), Rgba8Premul::transparent());
}

#[test]
fn fractional_alpha_rounds() {
    assert_eq!(Rgba8::rgba_f(0, 112, 243, 0.05).a, 13);
    assert_eq!(Rgba8::WHITE.with_alpha_f(0.5).a, 128);
    assert_eq!(Rgba8::WHITE.with_alpha_f(2.0).a, 255);
}
