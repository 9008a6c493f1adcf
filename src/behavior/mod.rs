//! Attribute behaviors and the runner that drives them.

use std::fmt;

use crate::{
    foundation::error::EmberResult,
    particle::pool::{Particle, ParticleId, ParticlePool},
};

pub(crate) mod color;
pub(crate) mod config;
pub(crate) mod scale;
pub(crate) mod set;
pub(crate) mod speed;
pub(crate) mod track;

/// Random source handed to behaviors.
pub type BehaviorRng = rand::rngs::StdRng;

/// Processing slot of a behavior within one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BehaviorOrder {
    /// Runs first; reserved for spawn-shape style behaviors.
    Spawn,
    /// Default slot.
    Normal,
    /// Runs after everything else. Position integration lives here.
    Late,
}

/// One attribute behavior attached to an emitter.
pub trait Behavior: fmt::Debug {
    /// Type tag used in configuration.
    fn kind(&self) -> &'static str;

    /// Slot in which [`Behavior::update_particle`] runs.
    fn order(&self) -> BehaviorOrder {
        BehaviorOrder::Normal
    }

    /// Seed starting values for a freshly spawned wave.
    fn initialize_new_particles(
        &mut self,
        pool: &mut ParticlePool,
        wave: &[ParticleId],
        rng: &mut BehaviorRng,
    );

    /// Advance one particle by one tick.
    fn update_particle(&mut self, _id: ParticleId, _particle: &mut Particle, _delta_sec: f64) {}

    /// Forget private state of a particle that is about to be recycled.
    fn retire_particle(&mut self, _id: ParticleId) {}

    /// Number of private per-particle timelines currently held.
    fn cached_timelines(&self) -> usize {
        0
    }

    /// Per-tick lookups that found no private timeline.
    fn missed_lookups(&self) -> u64 {
        0
    }
}

/// Instantiate the behavior described by `config`.
pub fn build_behavior(
    config: &config::BehaviorConfig,
    rng: &mut BehaviorRng,
) -> EmberResult<Box<dyn Behavior>> {
    use config::BehaviorConfig as C;

    let behavior: Box<dyn Behavior> = match config {
        C::Speed(c) => Box::new(speed::SpeedBehavior::new(c, rng)?),
        C::StaticSpeed(c) => Box::new(speed::StaticSpeedBehavior::new(c)?),
        C::Scale(c) => Box::new(scale::ScaleBehavior::new(c, rng)?),
        C::StaticScale(c) => Box::new(scale::StaticScaleBehavior::new(c)?),
        C::Color(c) => Box::new(color::ColorBehavior::new(c, rng)?),
        C::StaticColor(c) => Box::new(color::StaticColorBehavior::new(c)?),
    };
    tracing::debug!(kind = behavior.kind(), order = ?behavior.order(), "built behavior");
    Ok(behavior)
}
