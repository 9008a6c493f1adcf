use crate::foundation::core::{Point, Vec2, WHITE_TINT};

/// Stable handle to a particle slot.
///
/// `generation` increments each time a slot is recycled, so a handle to a retired
/// particle never aliases the particle that later reuses its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId {
    /// Slot index in the owning [`ParticlePool`].
    pub index: u32,
    /// Recycle count of the slot at the time this handle was issued.
    pub generation: u32,
}

/// Behavior-private per-particle scratch values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleState {
    /// Current velocity in units per second.
    pub velocity: Vec2,
    /// Random intensity factor applied to the shared speed timeline.
    pub speed_multiplier: f64,
    /// Random intensity factor applied to the shared scale timeline.
    pub scale_multiplier: f64,
}

impl Default for ParticleState {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            speed_multiplier: 1.0,
            scale_multiplier: 1.0,
        }
    }
}

/// Host particle consumed by attribute behaviors.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// World position.
    pub position: Point,
    /// Rotation in radians.
    pub rotation: f64,
    /// Per-axis scale; behaviors here only write uniform values.
    pub scale: Vec2,
    /// Packed `0xRRGGBB` tint.
    pub tint: u32,
    /// Elapsed lifetime over total lifetime, recomputed by the driver each tick.
    pub age_percent: f64,
    /// Behavior-private scratch values.
    pub state: ParticleState,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
            tint: WHITE_TINT,
            age_percent: 0.0,
            state: ParticleState::default(),
        }
    }
}

#[derive(Clone, Debug)]
struct Slot {
    particle: Particle,
    generation: u32,
    alive: bool,
}

/// Dense slot arena of particles with free-list recycling.
///
/// Slots are released only through [`BehaviorSet::retire`](crate::BehaviorSet::retire),
/// which first drops every behavior's private state for the particle.
///
/// ```compile_fail
/// let mut pool = ember::ParticlePool::new();
/// let id = pool.acquire();
/// pool.release(id);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParticlePool {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl ParticlePool {
    /// Empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty pool with room for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Take a slot, reusing a released one when available. The particle starts at
    /// its default state.
    pub fn acquire(&mut self) -> ParticleId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.alive = true;
            slot.particle = Particle::default();
            return ParticleId {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            particle: Particle::default(),
            generation: 0,
            alive: true,
        });
        ParticleId {
            index,
            generation: 0,
        }
    }

    /// Acquire `count` slots as one wave.
    pub fn acquire_wave(&mut self, count: usize) -> Vec<ParticleId> {
        (0..count).map(|_| self.acquire()).collect()
    }

    /// Return a slot to the free list. Returns `false` for stale or unknown ids.
    pub(crate) fn release(&mut self, id: ParticleId) -> bool {
        match self.slots.get_mut(id.index as usize) {
            Some(slot) if slot.alive && slot.generation == id.generation => {
                slot.alive = false;
                self.free.push(id.index);
                self.live -= 1;
                true
            }
            _ => false,
        }
    }

    /// Whether `id` refers to a live particle.
    pub fn contains(&self, id: ParticleId) -> bool {
        self.get(id).is_some()
    }

    /// Borrow a live particle.
    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.slots
            .get(id.index as usize)
            .filter(|s| s.alive && s.generation == id.generation)
            .map(|s| &s.particle)
    }

    /// Mutably borrow a live particle.
    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|s| s.alive && s.generation == id.generation)
            .map(|s| &mut s.particle)
    }

    /// Ids of all live particles in slot order.
    pub fn live_ids(&self) -> Vec<ParticleId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.alive)
            .map(|(i, s)| ParticleId {
                index: i as u32,
                generation: s.generation,
            })
            .collect()
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.live
    }

    /// `true` when no particle is live.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of slots ever allocated.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particle/pool.rs"]
mod tests;
