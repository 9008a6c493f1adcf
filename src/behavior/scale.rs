use rand::Rng as _;

use crate::{
    behavior::config::{ScaleConfig, StaticRangeConfig, ValueRange},
    behavior::speed::{check_min_mult, draw_multiplier},
    behavior::track::AttributeTrack,
    behavior::{Behavior, BehaviorRng},
    foundation::core::Vec2,
    foundation::error::EmberResult,
    particle::pool::{Particle, ParticleId, ParticlePool},
};

fn uniform(v: f64) -> Vec2 {
    Vec2::new(v, v)
}

/// Uniform scale over lifetime (`scale`).
#[derive(Debug)]
pub struct ScaleBehavior {
    track: AttributeTrack<f64, ValueRange>,
    min_mult: f64,
}

impl ScaleBehavior {
    /// Configuration tag.
    pub const KIND: &'static str = "scale";

    /// Build from configuration. `rng` seeds the pick-list default draw.
    pub fn new(config: &ScaleConfig, rng: &mut BehaviorRng) -> EmberResult<Self> {
        check_min_mult(config.min_mult)?;
        let track = match &config.pick_scale {
            Some(pick) => {
                if config.scale.is_some() {
                    tracing::warn!("scale has both scale and pickScale; using pickScale");
                }
                AttributeTrack::pick(pick, 1.0, rng)?
            }
            None => AttributeTrack::shared(config.scale.as_ref(), 1.0)?,
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

impl Behavior for ScaleBehavior {
    fn kind(&self) -> &'static str {
        Self::KIND
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
            p.state.scale_multiplier = mult;
            p.scale = uniform(first * mult);
        }
    }

    fn update_particle(&mut self, id: ParticleId, particle: &mut Particle, _delta_sec: f64) {
        let v = self.track.value_at(id, particle.age_percent);
        particle.scale = uniform(v * particle.state.scale_multiplier);
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

/// One random uniform scale per particle (`scaleStatic`).
#[derive(Debug)]
pub struct StaticScaleBehavior {
    range: ValueRange,
}

impl StaticScaleBehavior {
    /// Configuration tag.
    pub const KIND: &'static str = "scaleStatic";

    /// Build from configuration.
    pub fn new(config: &StaticRangeConfig) -> EmberResult<Self> {
        let range = ValueRange::new(config.min, config.max);
        range.validate()?;
        Ok(Self { range })
    }
}

impl Behavior for StaticScaleBehavior {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn initialize_new_particles(
        &mut self,
        pool: &mut ParticlePool,
        wave: &[ParticleId],
        rng: &mut BehaviorRng,
    ) {
        for &id in wave {
            if let Some(p) = pool.get_mut(id) {
                p.scale = uniform(self.range.at(rng.random::<f64>()));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/behavior/scale.rs"]
mod tests;
