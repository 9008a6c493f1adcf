//! Ember computes how a particle's speed, scale and tint evolve over its lifetime.
//!
//! Each attribute is driven by a [`Behavior`] that maps the particle's age fraction
//! (`0.0` at spawn, `1.0` at death) to a value, either by evaluating a keyframe
//! [`Timeline`] or by sampling one random value per particle.
//!
//! # Pieces
//!
//! - [`Timeline`]: ordered keyframes over any [`Lerp`] value kind (`f64`, [`Rgb8`]),
//!   with stepping and an optional [`Easing`] warp.
//! - Pick lists: each keyframe declares a range (or a color set) and every particle
//!   draws its own private timeline, cached per [`ParticleId`].
//! - [`BehaviorSet`]: builds behaviors from JSON, runs them in [`BehaviorOrder`],
//!   and exposes the explicit retire hook that drops per-particle state.
//!
//! The host driver owns the [`ParticlePool`], recomputes `age_percent` every tick,
//! and calls [`BehaviorSet::retire`] when a particle dies.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod behavior;
mod foundation;
mod particle;

pub use animation::ease::{Ease, EaseSegment, EaseSpec, Easing};
pub use animation::timeline::{KeyframeNode, Lerp, Timeline};
pub use behavior::color::{ColorBehavior, StaticColorBehavior};
pub use behavior::config::{
    BehaviorConfig, ColorConfig, ColorSpec, PickList, PickStep, ScaleConfig, SpeedConfig,
    StaticColorConfig, StaticRangeConfig, ValueList, ValueRange, ValueStep,
};
pub use behavior::scale::{ScaleBehavior, StaticScaleBehavior};
pub use behavior::set::BehaviorSet;
pub use behavior::speed::{SpeedBehavior, StaticSpeedBehavior};
pub use behavior::track::{AttributeTrack, PickSource, PickTemplate};
pub use behavior::{Behavior, BehaviorOrder, BehaviorRng, build_behavior};
pub use foundation::core::{Point, Rgb8, Vec2, WHITE_TINT, parse_tint};
pub use foundation::error::{EmberError, EmberResult};
pub use foundation::math::{clamp_unit, normalize_or, rotate, with_length};
pub use particle::cache::ParticleTimelines;
pub use particle::pool::{Particle, ParticleId, ParticlePool, ParticleState};
