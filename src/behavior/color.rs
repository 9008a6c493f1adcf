use crate::{
    behavior::config::{ColorConfig, ColorSpec, StaticColorConfig},
    behavior::track::AttributeTrack,
    behavior::{Behavior, BehaviorRng},
    foundation::core::{Rgb8, parse_tint},
    foundation::error::EmberResult,
    particle::pool::{Particle, ParticleId, ParticlePool},
};

/// Tint over lifetime (`color`).
#[derive(Debug)]
pub struct ColorBehavior {
    track: AttributeTrack<Rgb8, Vec<Rgb8>>,
}

impl ColorBehavior {
    /// Configuration tag.
    pub const KIND: &'static str = "color";

    /// Build from configuration. `rng` seeds the pick-list default draw.
    pub fn new(config: &ColorConfig, rng: &mut BehaviorRng) -> EmberResult<Self> {
        let track = match &config.color {
            Some(ColorSpec::Pick(pick)) => AttributeTrack::pick(pick, Rgb8::WHITE, rng)?,
            Some(ColorSpec::Keyframes(list)) => AttributeTrack::shared(Some(list), Rgb8::WHITE)?,
            None => AttributeTrack::shared(None, Rgb8::WHITE)?,
        };
        Ok(Self { track })
    }

    /// Value source backing this behavior.
    pub fn track(&self) -> &AttributeTrack<Rgb8, Vec<Rgb8>> {
        &self.track
    }
}

impl Behavior for ColorBehavior {
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
            let Some(p) = pool.get_mut(id) else {
                continue;
            };
            p.tint = self.track.init(id, rng).to_tint();
        }
    }

    fn update_particle(&mut self, id: ParticleId, particle: &mut Particle, _delta_sec: f64) {
        particle.tint = self.track.value_at(id, particle.age_percent).to_tint();
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

/// Fixed tint applied once at spawn (`colorStatic`).
#[derive(Debug)]
pub struct StaticColorBehavior {
    tint: u32,
}

impl StaticColorBehavior {
    /// Configuration tag.
    pub const KIND: &'static str = "colorStatic";

    /// Build from configuration; the hex string is parsed here, once.
    pub fn new(config: &StaticColorConfig) -> EmberResult<Self> {
        Ok(Self {
            tint: parse_tint(&config.color)?,
        })
    }

    /// Packed tint written to every particle.
    pub fn tint(&self) -> u32 {
        self.tint
    }
}

impl Behavior for StaticColorBehavior {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn initialize_new_particles(
        &mut self,
        pool: &mut ParticlePool,
        wave: &[ParticleId],
        _rng: &mut BehaviorRng,
    ) {
        for &id in wave {
            if let Some(p) = pool.get_mut(id) {
                p.tint = self.tint;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/behavior/color.rs"]
mod tests;
