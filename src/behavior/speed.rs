use rand::Rng as _;

use crate::{
    behavior::config::{SpeedConfig, StaticRangeConfig, ValueRange},
    behavior::track::AttributeTrack,
    behavior::{Behavior, BehaviorOrder, BehaviorRng},
    foundation::core::Vec2,
    foundation::error::{EmberError, EmberResult},
    foundation::math::{rotate, with_length},
    particle::pool::{Particle, ParticleId, ParticlePool},
};

/// Draw a per-particle intensity multiplier in `[min_mult, 1]`.
pub(crate) fn draw_multiplier(min_mult: f64, rng: &mut BehaviorRng) -> f64 {
    if min_mult == 1.0 {
        return 1.0;
    }
    ValueRange::new(min_mult, 1.0).at(rng.random::<f64>())
}

pub(crate) fn check_min_mult(min_mult: f64) -> EmberResult<()> {
    if !min_mult.is_finite() {
        return Err(EmberError::validation("minMult must be finite"));
    }
    Ok(())
}

/// Speed over lifetime (`moveSpeed`).
///
/// Velocity points along the particle's rotation at spawn. Each tick the velocity
/// keeps its direction, takes the interpolated speed as its length, and moves the
/// particle by `velocity * dt`.
#[derive(Debug)]
pub struct SpeedBehavior {
    track: AttributeTrack<f64, ValueRange>,
    min_mult: f64,
}

impl SpeedBehavior {
    /// Configuration tag.
    pub const KIND: &'static str = "moveSpeed";

    /// Build from configuration. `rng` seeds the pick-list default draw.
    pub fn new(config: &SpeedConfig, rng: &mut BehaviorRng) -> EmberResult<Self> {
        check_min_mult(config.min_mult)?;
        let track = match &config.pick_speed {
            Some(pick) => {
                if config.speed.is_some() {
                    tracing::warn!("moveSpeed has both speed and pickSpeed; using pickSpeed");
                }
                AttributeTrack::pick(pick, 0.0, rng)?
            }
            None => AttributeTrack::shared(config.speed.as_ref(), 0.0)?,
        };
        Ok(Self {
            track,
            min_mult: config.min_mult,
        })
    }

    /// Value source backing this behavior.
    pub fn track(&self) -> &AttributeTrack<f64, ValueRange> {
        &self.track
    }
}

impl Behavior for SpeedBehavior {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn order(&self) -> BehaviorOrder {
        BehaviorOrder::Late
    }

    fn initialize_new_particles(
        &mut self,
        pool: &mut ParticlePool,
        wave: &[ParticleId],
        rng: &mut BehaviorRng,
    ) {
        let pick = self.track.is_pick();
        for &id in wave {
            let Some(p) = pool.get_mut(id) else {
                continue;
            };
            let first = self.track.init(id, rng);
            let mult = if pick {
                1.0
            } else {
                draw_multiplier(self.min_mult, rng)
            };
            p.state.speed_multiplier = mult;
            p.state.velocity = rotate(Vec2::new(first * mult, 0.0), p.rotation);
        }
    }

    fn update_particle(&mut self, id: ParticleId, particle: &mut Particle, delta_sec: f64) {
        let speed =
            self.track.value_at(id, particle.age_percent) * particle.state.speed_multiplier;
        let heading = Vec2::from_angle(particle.rotation);
        particle.state.velocity = with_length(particle.state.velocity, speed, heading);
        particle.position += particle.state.velocity * delta_sec;
    }

    fn retire_particle(&mut self, id: ParticleId) {
        self.track.retire(id);
    }

    fn cached_timelines(&self) -> usize {
        self.track.cached_timelines()
    }

    fn missed_lookups(&self) -> u64 {
        self.track.missed_lookups()
    }
}

/// One random speed per particle (`moveSpeedStatic`), fixed for its lifetime.
#[derive(Debug)]
pub struct StaticSpeedBehavior {
    range: ValueRange,
}

impl StaticSpeedBehavior {
    /// Configuration tag.
    pub const KIND: &'static str = "moveSpeedStatic";

    /// Build from configuration.
    pub fn new(config: &StaticRangeConfig) -> EmberResult<Self> {
        let range = ValueRange::new(config.min, config.max);
        range.validate()?;
        Ok(Self { range })
    }
}

impl Behavior for StaticSpeedBehavior {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn order(&self) -> BehaviorOrder {
        BehaviorOrder::Late
    }

    fn initialize_new_particles(
        &mut self,
        pool: &mut ParticlePool,
        wave: &[ParticleId],
        rng: &mut BehaviorRng,
    ) {
        for &id in wave {
            let Some(p) = pool.get_mut(id) else {
                continue;
            };
            let speed = self.range.at(rng.random::<f64>());
            p.state.velocity = rotate(Vec2::new(speed, 0.0), p.rotation);
        }
    }

    fn update_particle(&mut self, _id: ParticleId, particle: &mut Particle, delta_sec: f64) {
        particle.position += particle.state.velocity * delta_sec;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/behavior/speed.rs"]
mod tests;
