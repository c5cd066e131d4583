/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = f64::powi(10.0, decimals);
    (value * factor).round() / factor
}

/// Integer degrees in [0, 360). A bearing of 359.6 shows as 0, not 360.
pub fn round_degrees(degrees: f64) -> u16 {
    (degrees.round() as i64).rem_euclid(360) as u16
}

pub fn degrees_label(degrees: f64) -> String {
    format!("{}°", round_degrees(degrees))
}

pub fn knots_label(knots: f64) -> String {
    format!("{knots:.1} kn")
}
