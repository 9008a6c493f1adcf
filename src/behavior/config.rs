//! Declarative behavior configuration, deserialized from JSON.
//!
//! The shapes mirror the emitter config format: each behavior is
//! `{"type": "<tag>", "config": {...}}`, keyframe lists are
//! `{"list": [{"value": .., "time": ..}], "isStepped": bool, "ease": ..}`, and pick
//! lists replace each value with a range (or a set of colors) sampled per particle.

use serde::{Deserialize, Serialize};

use crate::{
    animation::ease::EaseSpec,
    animation::timeline::{KeyframeNode, Lerp, Timeline},
    foundation::core::Rgb8,
    foundation::error::{EmberError, EmberResult},
};

/// One declared `(value, time)` keyframe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueStep<T> {
    /// Keyframe value.
    pub value: T,
    /// Age fraction in `[0, 1]`.
    pub time: f64,
}

/// An ordered keyframe list with list-wide stepping and easing.
///
/// Deserializes from either the full object form or a bare array of steps.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueList<T> {
    /// Keyframes sorted by time.
    pub list: Vec<ValueStep<T>>,
    /// Hold each value until the next keyframe.
    pub is_stepped: bool,
    /// Optional easing applied to every segment.
    pub ease: Option<EaseSpec>,
}

impl<T> ValueList<T> {
    /// Linear, non-stepped list from `(value, time)` pairs.
    pub fn linear(steps: impl IntoIterator<Item = (T, f64)>) -> Self {
        Self {
            list: steps
                .into_iter()
                .map(|(value, time)| ValueStep { value, time })
                .collect(),
            is_stepped: false,
            ease: None,
        }
    }
}

impl<T> ValueList<T>
where
    T: Lerp + Clone,
{
    /// Build the shared timeline. The first node carries the easing and stepped flag.
    pub fn to_timeline(&self) -> EmberResult<Timeline<T>> {
        if self.list.is_empty() {
            return Err(EmberError::validation("keyframe list must not be empty"));
        }
        let ease = self.ease.as_ref().map(EaseSpec::resolve).transpose()?;

        let nodes = self
            .list
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let node = KeyframeNode::new(step.time, step.value.clone());
                if i == 0 {
                    node.with_ease(ease.clone()).with_stepped(self.is_stepped)
                } else {
                    node
                }
            })
            .collect();
        Timeline::from_nodes(nodes)
    }
}

impl<'de, T> Deserialize<'de> for ValueList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Full {
                list: Vec<ValueStep<T>>,
                #[serde(default, rename = "isStepped")]
                is_stepped: bool,
                #[serde(default)]
                ease: Option<EaseSpec>,
            },
            Bare(Vec<ValueStep<T>>),
        }

        Ok(match Repr::<T>::deserialize(deserializer)? {
            Repr::Full {
                list,
                is_stepped,
                ease,
            } => Self {
                list,
                is_stepped,
                ease,
            },
            Repr::Bare(list) => Self {
                list,
                is_stepped: false,
                ease: None,
            },
        })
    }
}

/// Closed numeric range `[min, max]`.
///
/// Deserializes from `{"min": a, "max": b}` or `[a, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ValueRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl ValueRange {
    /// Build a range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Reject non-finite bounds.
    pub fn validate(&self) -> EmberResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(EmberError::validation("range bounds must be finite"));
        }
        Ok(())
    }

    /// Map a unit sample `u` in `[0, 1)` into the range.
    pub fn at(&self, u: f64) -> f64 {
        self.min + u * (self.max - self.min)
    }
}

impl<'de> Deserialize<'de> for ValueRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Obj { min: f64, max: f64 },
            Arr([f64; 2]),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Obj { min, max } => Self { min, max },
            Repr::Arr([min, max]) => Self { min, max },
        })
    }
}

/// One pick-list entry: a source sampled once per particle, at `time`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PickStep<S> {
    /// Range or candidate set.
    pub value: S,
    /// Age fraction in `[0, 1]`.
    pub time: f64,
}

/// Pick list: per-particle randomized keyframes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickList<S> {
    /// Entries sorted by time.
    #[serde(alias = "pickList")]
    pub list: Vec<PickStep<S>>,
    /// Hold each value until the next keyframe.
    #[serde(default)]
    pub is_stepped: bool,
    /// Optional easing applied to every segment.
    #[serde(default)]
    pub ease: Option<EaseSpec>,
}

fn default_min_mult() -> f64 {
    1.0
}

/// `moveSpeed` configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedConfig {
    /// Shared speed keyframes. Defaults to a constant zero.
    #[serde(default)]
    pub speed: Option<ValueList<f64>>,
    /// Lower bound of the per-particle intensity multiplier.
    #[serde(default = "default_min_mult")]
    pub min_mult: f64,
    /// Per-particle randomized speed keyframes. Takes precedence over `speed`.
    #[serde(default)]
    pub pick_speed: Option<PickList<ValueRange>>,
}

/// `scale` configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleConfig {
    /// Shared scale keyframes. Defaults to a constant one.
    #[serde(default)]
    pub scale: Option<ValueList<f64>>,
    /// Lower bound of the per-particle intensity multiplier.
    #[serde(default = "default_min_mult")]
    pub min_mult: f64,
    /// Per-particle randomized scale keyframes. Takes precedence over `scale`.
    #[serde(default)]
    pub pick_scale: Option<PickList<ValueRange>>,
}

/// Color source: shared hex keyframes or a pick list of hex candidate sets.
///
/// An object with a `pickList` key is a pick list; anything else is read as a
/// keyframe list.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSpec {
    /// `{"pickList": [{"value": ["#rrggbb", ..], "time": ..}], ..}`.
    Pick(PickList<Vec<Rgb8>>),
    /// Ordered hex keyframes.
    Keyframes(ValueList<Rgb8>),
}

impl Serialize for ColorSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct PickRepr<'a> {
            pick_list: &'a [PickStep<Vec<Rgb8>>],
            is_stepped: bool,
            ease: &'a Option<EaseSpec>,
        }

        match self {
            Self::Pick(pick) => PickRepr {
                pick_list: &pick.list,
                is_stepped: pick.is_stepped,
                ease: &pick.ease,
            }
            .serialize(serializer),
            Self::Keyframes(list) => list.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ColorSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let value = serde_json::Value::deserialize(deserializer)?;
        let is_pick = value
            .as_object()
            .is_some_and(|obj| obj.contains_key("pickList"));
        if is_pick {
            PickList::deserialize(value)
                .map(Self::Pick)
                .map_err(D::Error::custom)
        } else {
            ValueList::deserialize(value)
                .map(Self::Keyframes)
                .map_err(D::Error::custom)
        }
    }
}

/// `color` configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Color source. Defaults to constant white.
    #[serde(default)]
    pub color: Option<ColorSpec>,
}

/// `moveSpeedStatic` / `scaleStatic` configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticRangeConfig {
    /// Lower bound of the per-particle draw.
    pub min: f64,
    /// Upper bound of the per-particle draw.
    pub max: f64,
}

/// `colorStatic` configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticColorConfig {
    /// Hex color (`#rrggbb`, `0xrrggbb` or `rrggbb`).
    pub color: String,
}

/// One behavior entry of an emitter config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config")]
pub enum BehaviorConfig {
    /// Speed over lifetime.
    #[serde(rename = "moveSpeed")]
    Speed(SpeedConfig),
    /// One random speed per particle.
    #[serde(rename = "moveSpeedStatic")]
    StaticSpeed(StaticRangeConfig),
    /// Uniform scale over lifetime.
    #[serde(rename = "scale")]
    Scale(ScaleConfig),
    /// One random scale per particle.
    #[serde(rename = "scaleStatic")]
    StaticScale(StaticRangeConfig),
    /// Tint over lifetime.
    #[serde(rename = "color")]
    Color(ColorConfig),
    /// Fixed tint.
    #[serde(rename = "colorStatic")]
    StaticColor(StaticColorConfig),
}

impl BehaviorConfig {
    /// Behavior type tag as written in configuration.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Speed(_) => "moveSpeed",
            Self::StaticSpeed(_) => "moveSpeedStatic",
            Self::Scale(_) => "scale",
            Self::StaticScale(_) => "scaleStatic",
            Self::Color(_) => "color",
            Self::StaticColor(_) => "colorStatic",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/behavior/config.rs"]
mod tests;
