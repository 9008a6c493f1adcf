use crate::{animation::timeline::Timeline, particle::pool::ParticleId};

/// Private per-particle timelines for one behavior instance.
///
/// Slots are indexed by [`ParticleId::index`] and tagged with the generation they
/// were written for; a lookup with a newer generation misses even if the old
/// entry was never removed.
#[derive(Clone, Debug)]
pub struct ParticleTimelines<T> {
    slots: Vec<Option<(u32, Timeline<T>)>>,
    live: usize,
}

impl<T> Default for ParticleTimelines<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            live: 0,
        }
    }
}

impl<T> ParticleTimelines<T> {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `timeline` for `id`, replacing whatever the slot held.
    pub fn insert(&mut self, id: ParticleId, timeline: Timeline<T>) {
        let index = id.index as usize;
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        if self.slots[index].is_none() {
            self.live += 1;
        }
        self.slots[index] = Some((id.generation, timeline));
    }

    /// Private timeline of `id`, if one was stored for this generation.
    pub fn get(&self, id: ParticleId) -> Option<&Timeline<T>> {
        match self.slots.get(id.index as usize) {
            Some(Some((generation, timeline))) if *generation == id.generation => Some(timeline),
            _ => None,
        }
    }

    /// Mutable access to the private timeline of `id`.
    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut Timeline<T>> {
        match self.slots.get_mut(id.index as usize) {
            Some(Some((generation, timeline))) if *generation == id.generation => Some(timeline),
            _ => None,
        }
    }

    /// Drop the entry for `id`. Stale ids leave a newer entry untouched.
    pub fn remove(&mut self, id: ParticleId) -> Option<Timeline<T>> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if !matches!(slot, Some((generation, _)) if *generation == id.generation) {
            return None;
        }
        self.live -= 1;
        slot.take().map(|(_, timeline)| timeline)
    }

    /// Number of stored timelines.
    pub fn len(&self) -> usize {
        self.live
    }

    /// `true` when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particle/cache.rs"]
mod tests;
