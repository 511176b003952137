//! Static radial shading laid over the painted sphere.

use crate::config::GlobeConfig;
use crate::palette::Rgba;

/// A color stop at `offset` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Two-circle radial gradient with canvas semantics: the start circle
/// `(x0, y0, r0)` is offset 0, the end circle `(x1, y1, r1)` is offset 1.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub x0: f64,
    pub y0: f64,
    pub r0: f64,
    pub x1: f64,
    pub y1: f64,
    pub r1: f64,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Gradient offset covering point `(x, y)`, or `None` if no circle of the
    /// interpolated family passes through it.
    ///
    /// Solves `|p - c(t)| = r(t)` for the largest `t` with `r(t) >= 0`.
    pub fn offset_at(&self, x: f64, y: f64) -> Option<f64> {
        let (dx, dy) = (x - self.x0, y - self.y0);
        let (cdx, cdy) = (self.x1 - self.x0, self.y1 - self.y0);
        let dr = self.r1 - self.r0;

        let a = cdx * cdx + cdy * cdy - dr * dr;
        let half_b = dx * cdx + dy * cdy + self.r0 * dr;
        let c = dx * dx + dy * dy - self.r0 * self.r0;

        let radius_ok = |t: f64| self.r0 + t * dr >= 0.0;

        if a.abs() < 1e-12 {
            if half_b.abs() < 1e-12 {
                return None;
            }
            let t = c / (2.0 * half_b);
            return radius_ok(t).then_some(t);
        }

        let disc = half_b * half_b - a * c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let (t1, t2) = ((half_b + root) / a, (half_b - root) / a);
        let (hi, lo) = if t1 >= t2 { (t1, t2) } else { (t2, t1) };

        if radius_ok(hi) {
            Some(hi)
        } else if radius_ok(lo) {
            Some(lo)
        } else {
            None
        }
    }

    /// Color at offset `t`, padded with the end stops outside `[0, 1]`.
    pub fn color_at_offset(&self, t: f64) -> Rgba {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Rgba::TRANSPARENT;
        };
        let t = t.clamp(0.0, 1.0);
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (s0, s1) = (&pair[0], &pair[1]);
            if t <= s1.offset {
                let span = s1.offset - s0.offset;
                if span <= 0.0 {
                    return s1.color;
                }
                return s0.color.lerp(&s1.color, ((t - s0.offset) / span).clamp(0.0, 1.0));
            }
        }
        last.color
    }

    /// Color painted at point `(x, y)`.
    pub fn color_at(&self, x: f64, y: f64) -> Rgba {
        self.offset_at(x, y)
            .map(|t| self.color_at_offset(t))
            .unwrap_or(Rgba::TRANSPARENT)
    }
}

/// Highlight near the upper-left light point fading to a dark rim.
pub fn sphere_shading(config: &GlobeConfig) -> RadialGradient {
    let size = config.canvas_size() as f64;
    let half = size / 2.0;
    let white = Rgba::opaque(255, 255, 255);
    let black = Rgba::opaque(0, 0, 0);

    RadialGradient {
        x0: size * 20.0 / 56.0,
        y0: size * 18.0 / 56.0,
        r0: 0.0,
        x1: half,
        y1: half,
        r1: half,
        stops: vec![
            ColorStop::new(0.0, white.with_alpha(0.18)),
            ColorStop::new(0.3, white.with_alpha(0.04)),
            ColorStop::new(0.55, Rgba::TRANSPARENT),
            ColorStop::new(0.8, black.with_alpha(0.12)),
            ColorStop::new(1.0, black.with_alpha(0.35)),
        ],
    }
}
