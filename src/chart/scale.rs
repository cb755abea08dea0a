/// An RGB color with CSS hex output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#8b0000`.
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation between two colors, `t` in `[0, 1]`.
    fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let channel = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
        Rgb::new(
            channel(a.r, b.r),
            channel(a.g, b.g),
            channel(a.b, b.b),
        )
    }
}

/// Gradient stops for the happiness color ramp, low score to high:
/// dark red, orange-red, yellow-orange, yellow, yellow-green, green.
pub const HAPPINESS_STOPS: [Rgb; 6] = [
    Rgb::new(0x8b, 0x00, 0x00),
    Rgb::new(0xff, 0x45, 0x00),
    Rgb::new(0xff, 0xd7, 0x00),
    Rgb::new(0xff, 0xff, 0x00),
    Rgb::new(0x9a, 0xcd, 0x32),
    Rgb::new(0x00, 0xff, 0x00),
];

/// Maps a numeric domain linearly onto an output range.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps `value` from the domain to the range. A zero-width domain maps
    /// everything to the start of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Maps a numeric domain onto a multi-stop color gradient by piecewise
/// linear interpolation between adjacent stops.
#[derive(Clone, Copy, Debug)]
pub struct SequentialScale {
    domain: (f64, f64),
    stops: &'static [Rgb],
}

impl SequentialScale {
    /// The happiness ramp over the given domain (low = red, high = green).
    pub fn happiness(domain: (f64, f64)) -> Self {
        Self {
            domain,
            stops: &HAPPINESS_STOPS,
        }
    }

    pub fn color(&self, value: f64) -> Rgb {
        let (d0, d1) = self.domain;
        let t = if d1 == d0 {
            // Degenerate domain (a single distinct score in view): every
            // bar gets the top of the ramp, matching a 0/0 normalized max.
            1.0
        } else {
            ((value - d0) / (d1 - d0)).clamp(0.0, 1.0)
        };

        let segments = self.stops.len() - 1;
        let position = t * segments as f64;
        let i = (position.floor() as usize).min(segments - 1);
        Rgb::lerp(self.stops[i], self.stops[i + 1], position - i as f64)
    }
}
