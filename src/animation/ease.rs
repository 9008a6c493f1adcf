use std::{fmt, sync::Arc};

use crate::foundation::error::{EmberError, EmberResult};

/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Sinusoidal ease-in.
    InSine,
    /// Sinusoidal ease-out.
    OutSine,
    /// Sinusoidal ease-in/out.
    InOutSine,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        use std::f64::consts::FRAC_PI_2;

        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InSine => 1.0 - (t * FRAC_PI_2).cos(),
            Self::OutSine => (t * FRAC_PI_2).sin(),
            Self::InOutSine => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
        }
    }
}

/// One piece of a segmented easing curve.
///
/// Covers input times `[start, end]`. Within the segment the output follows a
/// one-dimensional cubic Bezier from `s` to `e` with control values `c1` and `c2`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EaseSegment {
    /// Input time where the segment begins.
    pub start: f64,
    /// Input time where the segment ends.
    pub end: f64,
    /// Output at `start`.
    pub s: f64,
    /// First control value.
    pub c1: f64,
    /// Second control value.
    pub c2: f64,
    /// Output at `end`.
    pub e: f64,
}

impl EaseSegment {
    /// Evaluate the segment shape at local fraction `u` in `[0, 1]`.
    pub fn shape(&self, u: f64) -> f64 {
        let v = 1.0 - u;
        v * v * v * self.s
            + 3.0 * v * v * u * self.c1
            + 3.0 * v * u * u * self.c2
            + u * u * u * self.e
    }

    fn local(&self, t: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            1.0
        } else {
            ((t - self.start) / span).clamp(0.0, 1.0)
        }
    }
}

/// Declarative easing as it appears in behavior configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum EaseSpec {
    /// A named simple ease, e.g. `"InOutQuad"`.
    Named(Ease),
    /// Contiguous segments covering `[0, 1]`.
    Segments(Vec<EaseSegment>),
}

impl EaseSpec {
    /// Resolve into a callable [`Easing`], validating segment lists.
    pub fn resolve(&self) -> EmberResult<Easing> {
        match self {
            Self::Named(ease) => Ok(Easing::Named(*ease)),
            Self::Segments(segments) => {
                validate_segments(segments)?;
                Ok(Easing::Segments(segments.as_slice().into()))
            }
        }
    }
}

const SEGMENT_EPS: f64 = 1e-9;

fn validate_segments(segments: &[EaseSegment]) -> EmberResult<()> {
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return Err(EmberError::animation(
            "ease segment list must not be empty",
        ));
    };
    if segments
        .iter()
        .any(|s| s.start.is_nan() || s.end.is_nan() || s.start > s.end)
    {
        return Err(EmberError::animation(
            "ease segment start must be <= end",
        ));
    }
    if !segments
        .windows(2)
        .all(|w| (w[1].start - w[0].end).abs() <= SEGMENT_EPS)
    {
        return Err(EmberError::animation(
            "ease segments must be sorted and contiguous",
        ));
    }
    if first.start.abs() > SEGMENT_EPS || (last.end - 1.0).abs() > SEGMENT_EPS {
        return Err(EmberError::animation("ease segments must span [0, 1]"));
    }
    Ok(())
}

/// A resolved easing function from `[0, 1]` to `[0, 1]`.
#[derive(Clone)]
pub enum Easing {
    /// One of the named eases.
    Named(Ease),
    /// A validated segmented curve.
    Segments(Arc<[EaseSegment]>),
    /// A caller-supplied function.
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl Easing {
    /// Wrap a callable that already maps `[0, 1]` to `[0, 1]`.
    pub fn custom(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Warp normalized progress `t`.
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Self::Named(ease) => ease.apply(t),
            Self::Segments(segments) => {
                // validated non-empty at resolve time
                let seg = segments
                    .iter()
                    .find(|s| s.end >= t)
                    .or_else(|| segments.last());
                match seg {
                    Some(seg) => seg.shape(seg.local(t)),
                    None => t,
                }
            }
            Self::Custom(f) => f(t),
        }
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(ease) => f.debug_tuple("Named").field(ease).finish(),
            Self::Segments(segments) => f.debug_tuple("Segments").field(&segments.len()).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<Ease> for Easing {
    fn from(ease: Ease) -> Self {
        Self::Named(ease)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
