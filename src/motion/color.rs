use std::fmt;

use crate::error::MotionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or the `#rgb` shorthand. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, MotionError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || MotionError::InvalidHex(hex.to_string());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid())
                };
                Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Per-channel linear blend towards `other`. `t` is clamped to [0, 1] and
    /// each channel is rounded half away from zero.
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let blend = |a: u8, b: u8| {
            let (a, b) = (f64::from(a), f64::from(b));
            (a + (b - a) * t).round() as u8
        };
        Rgb::new(
            blend(self.r, other.r),
            blend(self.g, other.g),
            blend(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgb,
}

/// Scroll-keyed colour ramp. Always holds at least one stop, the stop
/// offsets are strictly increasing and neighbouring stops are a finite
/// distance apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn new(stops: Vec<ColorStop>) -> Result<Self, MotionError> {
        if stops.is_empty() {
            return Err(MotionError::EmptyGradient);
        }
        for (index, pair) in stops.windows(2).enumerate() {
            // Negated so NaN offsets are rejected too.
            if !(pair[1].offset > pair[0].offset) {
                return Err(MotionError::UnorderedStops {
                    index: index + 1,
                    offset: pair[1].offset,
                });
            }
            if !(pair[1].offset - pair[0].offset).is_finite() {
                return Err(MotionError::UnboundedSpan { index: index + 1 });
            }
        }
        Ok(Self { stops })
    }

    pub fn from_hex_stops(stops: &[(f64, &str)]) -> Result<Self, MotionError> {
        let stops = stops
            .iter()
            .map(|&(offset, hex)| {
                Rgb::from_hex(hex).map(|color| ColorStop { offset, color })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(stops)
    }

    #[cfg(test)]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn color_at(&self, offset: f64) -> Rgb {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if offset.is_nan() || offset <= first.offset {
            return first.color;
        }
        if offset >= last.offset {
            return last.color;
        }

        // first.offset < offset < last.offset, so 1 <= upper < len
        let upper = self.stops.partition_point(|stop| stop.offset <= offset);
        let lower = self.stops[upper - 1];
        let upper = self.stops[upper];
        let t = (offset - lower.offset) / (upper.offset - lower.offset);
        lower.color.mix(upper.color, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Gradient {
        Gradient::from_hex_stops(&[(0.0, "#000000"), (900.0, "#f5f5f5")]).unwrap()
    }

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgb::from_hex("#f5f5f5").unwrap(), Rgb::new(245, 245, 245));
        assert_eq!(Rgb::from_hex("0a1B2c").unwrap(), Rgb::new(10, 27, 44));
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#", "#12345", "#gggggg", "#+fffff", "#ffé"] {
            assert!(matches!(Rgb::from_hex(bad), Err(MotionError::InvalidHex(_))), "{bad}");
        }
    }

    #[test]
    fn midpoint_blends_each_channel() {
        // 245 / 2 = 122.5, rounded away from zero
        assert_eq!(ramp().color_at(450.0), Rgb::new(123, 123, 123));
        assert_eq!(ramp().color_at(450.0).to_string(), "rgb(123,123,123)");
    }

    #[test]
    fn exact_stops_return_their_colour() {
        let gradient = Gradient::from_hex_stops(&[
            (0.0, "#0a0a0a"),
            (600.0, "#1e1b4b"),
            (1400.0, "#f5f5f5"),
        ])
        .unwrap();
        for stop in gradient.stops() {
            assert_eq!(gradient.color_at(stop.offset), stop.color);
        }
    }

    #[test]
    fn clamps_outside_the_range() {
        assert_eq!(ramp().color_at(-200.0), Rgb::new(0, 0, 0));
        assert_eq!(ramp().color_at(10_000.0), Rgb::new(245, 245, 245));
        assert_eq!(ramp().color_at(f64::NAN), Rgb::new(0, 0, 0));
    }

    #[test]
    fn single_stop_is_constant() {
        let gradient = Gradient::from_hex_stops(&[(300.0, "#123456")]).unwrap();
        assert_eq!(gradient.color_at(0.0), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(gradient.color_at(5000.0), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn rejects_empty_and_unordered_tables() {
        assert_eq!(Gradient::new(Vec::new()), Err(MotionError::EmptyGradient));
        let err = Gradient::from_hex_stops(&[(0.0, "#000"), (100.0, "#fff"), (100.0, "#000")]);
        assert_eq!(err, Err(MotionError::UnorderedStops { index: 2, offset: 100.0 }));
        assert!(Gradient::from_hex_stops(&[(0.0, "#000"), (f64::NAN, "#fff")]).is_err());
    }

    #[test]
    fn rejects_stops_too_far_apart_to_blend() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        let wide = vec![
            ColorStop { offset: -f64::MAX, color: black },
            ColorStop { offset: f64::MAX, color: white },
        ];
        assert_eq!(Gradient::new(wide), Err(MotionError::UnboundedSpan { index: 1 }));

        let infinite = vec![
            ColorStop { offset: 0.0, color: black },
            ColorStop { offset: f64::INFINITY, color: white },
        ];
        assert_eq!(Gradient::new(infinite), Err(MotionError::UnboundedSpan { index: 1 }));

        let wide_but_finite = Gradient::new(vec![
            ColorStop { offset: -f64::MAX / 2.0, color: black },
            ColorStop { offset: f64::MAX / 2.0, color: white },
        ])
        .unwrap();
        assert_eq!(wide_but_finite.color_at(0.0), Rgb::new(128, 128, 128));
    }
}
