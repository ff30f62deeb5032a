use plotters::style::RGBColor;

pub const POSITIVE: RGBColor = RGBColor(46, 125, 50);
pub const NEGATIVE: RGBColor = RGBColor(198, 40, 40);
pub const NEUTRAL: RGBColor = RGBColor(96, 125, 139);
pub const POINT: RGBColor = RGBColor(25, 118, 210);
pub const MISSING: RGBColor = RGBColor(224, 224, 224);

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(from: u8, to: u8, t: f64) -> u8 {
    let (from, to) = (f64::from(from), f64::from(to));
    (to - from).mul_add(t, from).round().clamp(0.0, 255.0) as u8
}

/// White at zero, red towards +1, blue towards -1.
pub fn diverging(value: Option<f64>) -> RGBColor {
    let Some(v) = value else {
        return MISSING;
    };
    let t = v.clamp(-1.0, 1.0).abs();
    let target = if v >= 0.0 {
        RGBColor(178, 24, 43)
    } else {
        RGBColor(33, 102, 172)
    };
    RGBColor(
        lerp(255, target.0, t),
        lerp(255, target.1, t),
        lerp(255, target.2, t),
    )
}

/// Bar colour for a mean polarity.
pub fn polarity(value: f64) -> RGBColor {
    if value > 0.1 {
        POSITIVE
    } else if value < -0.1 {
        NEGATIVE
    } else {
        NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diverging_endpoints() {
        assert_eq!(diverging(Some(0.0)), RGBColor(255, 255, 255));
        assert_eq!(diverging(Some(1.0)), RGBColor(178, 24, 43));
        assert_eq!(diverging(Some(-1.0)), RGBColor(33, 102, 172));
        assert_eq!(diverging(None), MISSING);
    }
}
