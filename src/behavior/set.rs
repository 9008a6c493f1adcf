use rand::SeedableRng as _;

use crate::{
    behavior::config::BehaviorConfig,
    behavior::{Behavior, BehaviorRng, build_behavior},
    foundation::error::EmberResult,
    particle::pool::{ParticleId, ParticlePool},
};

/// Ordered behaviors of one emitter plus the random source they draw from.
///
/// The driver owns the particle pool and is responsible for recomputing
/// `age_percent` before each [`BehaviorSet::update`] and for calling
/// [`BehaviorSet::retire`] when a particle dies.
#[derive(Debug)]
pub struct BehaviorSet {
    behaviors: Vec<Box<dyn Behavior>>, // stably sorted by order()
    rng: BehaviorRng,
}

impl BehaviorSet {
    /// Empty set with a deterministic random source.
    pub fn new(seed: u64) -> Self {
        Self {
            behaviors: Vec::new(),
            rng: BehaviorRng::seed_from_u64(seed),
        }
    }

    /// Build every behavior in `configs`.
    #[tracing::instrument(skip(configs), fields(count = configs.len()))]
    pub fn from_configs(configs: &[BehaviorConfig], seed: u64) -> EmberResult<Self> {
        let mut set = Self::new(seed);
        for config in configs {
            let behavior = build_behavior(config, &mut set.rng)?;
            set.push(behavior);
        }
        Ok(set)
    }

    /// Parse a JSON array of behavior configs and build them.
    pub fn from_json(json: &str, seed: u64) -> EmberResult<Self> {
        let configs: Vec<BehaviorConfig> = serde_json::from_str(json)?;
        Self::from_configs(&configs, seed)
    }

    /// Add a behavior, keeping the set ordered by [`Behavior::order`].
    pub fn push(&mut self, behavior: Box<dyn Behavior>) {
        let at = self
            .behaviors
            .partition_point(|b| b.order() <= behavior.order());
        self.behaviors.insert(at, behavior);
    }

    /// Behaviors in processing order.
    pub fn behaviors(&self) -> &[Box<dyn Behavior>] {
        &self.behaviors
    }

    /// Seed a freshly acquired wave.
    pub fn initialize_wave(&mut self, pool: &mut ParticlePool, wave: &[ParticleId]) {
        for behavior in &mut self.behaviors {
            behavior.initialize_new_particles(pool, wave, &mut self.rng);
        }
    }

    /// Advance every live particle by one tick.
    pub fn update(&mut self, pool: &mut ParticlePool, delta_sec: f64) {
        for id in pool.live_ids() {
            let Some(particle) = pool.get_mut(id) else {
                continue;
            };
            for behavior in &mut self.behaviors {
                behavior.update_particle(id, particle, delta_sec);
            }
        }
    }

    /// Drop every behavior's private state for `id` and release its slot.
    ///
    /// Returns `false` when `id` was not live.
    pub fn retire(&mut self, pool: &mut ParticlePool, id: ParticleId) -> bool {
        if !pool.contains(id) {
            return false;
        }
        for behavior in &mut self.behaviors {
            behavior.retire_particle(id);
        }
        pool.release(id)
    }

    /// Private timelines held across all behaviors.
    pub fn cached_timelines(&self) -> usize {
        self.behaviors.iter().map(|b| b.cached_timelines()).sum()
    }

    /// Missed private-timeline lookups across all behaviors.
    pub fn missed_lookups(&self) -> u64 {
        self.behaviors.iter().map(|b| b.missed_lookups()).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/behavior/set.rs"]
mod tests;
