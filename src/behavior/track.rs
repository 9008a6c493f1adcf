use rand::{Rng as _, seq::IndexedRandom as _};

use crate::{
    animation::ease::{EaseSpec, Easing},
    animation::timeline::{KeyframeNode, Lerp, Timeline},
    behavior::BehaviorRng,
    behavior::config::{PickList, ValueList, ValueRange},
    foundation::core::Rgb8,
    foundation::error::{EmberError, EmberResult},
    particle::cache::ParticleTimelines,
    particle::pool::ParticleId,
};

/// Something a pick-list entry draws one value of type `T` from.
pub trait PickSource<T> {
    /// Reject sources that cannot produce a value.
    fn validate(&self) -> EmberResult<()>;

    /// Draw one value.
    fn pick(&self, rng: &mut BehaviorRng) -> T;
}

impl PickSource<f64> for ValueRange {
    fn validate(&self) -> EmberResult<()> {
        ValueRange::validate(self)
    }

    fn pick(&self, rng: &mut BehaviorRng) -> f64 {
        self.at(rng.random::<f64>())
    }
}

impl PickSource<Rgb8> for Vec<Rgb8> {
    fn validate(&self) -> EmberResult<()> {
        if self.is_empty() {
            return Err(EmberError::validation(
                "color pick entry must list at least one color",
            ));
        }
        Ok(())
    }

    fn pick(&self, rng: &mut BehaviorRng) -> Rgb8 {
        self.choose(rng).copied().unwrap_or(Rgb8::WHITE)
    }
}

/// Resolved pick list: times, sources, list-wide settings.
#[derive(Clone, Debug)]
pub struct PickTemplate<S> {
    steps: Vec<(f64, S)>,
    stepped: bool,
    ease: Option<Easing>,
}

impl<S> PickTemplate<S> {
    /// Validate and resolve a declarative pick list.
    pub fn from_config<T>(config: &PickList<S>) -> EmberResult<Self>
    where
        S: PickSource<T> + Clone,
    {
        for step in &config.list {
            if !step.time.is_finite() {
                return Err(EmberError::animation("pick list times must be finite"));
            }
            step.value.validate()?;
        }
        if !config.list.windows(2).all(|w| w[0].time <= w[1].time) {
            return Err(EmberError::animation("pick list must be sorted by time"));
        }

        Ok(Self {
            steps: config
                .list
                .iter()
                .map(|step| (step.time, step.value.clone()))
                .collect(),
            stepped: config.is_stepped,
            ease: config.ease.as_ref().map(EaseSpec::resolve).transpose()?,
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` when the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Draw one private timeline: one independent sample per entry, same times.
    ///
    /// Returns `None` for an empty list.
    pub fn assign_random_list<T>(&self, rng: &mut BehaviorRng) -> Option<Timeline<T>>
    where
        S: PickSource<T>,
        T: Lerp + Clone,
    {
        let nodes = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, (time, source))| {
                let node = KeyframeNode::new(*time, source.pick(rng));
                if i == 0 {
                    node.with_ease(self.ease.clone()).with_stepped(self.stepped)
                } else {
                    node
                }
            })
            .collect::<Vec<_>>();
        // sortedness was checked in `from_config`
        Timeline::from_nodes(nodes).ok()
    }

    fn first_only(&self) -> Self
    where
        S: Clone,
    {
        Self {
            steps: self.steps.iter().take(1).cloned().collect(),
            stepped: self.stepped,
            ease: self.ease.clone(),
        }
    }
}

/// Where an attribute behavior gets its values from.
#[derive(Clone, Debug)]
pub enum AttributeTrack<T, S> {
    /// One timeline shared by every particle.
    Shared(Timeline<T>),
    /// One private timeline per particle, drawn from a pick list.
    Pick {
        /// Resolved pick list.
        template: PickTemplate<S>,
        /// Read for particles without a private timeline. Built from one draw of
        /// the first entry, or the constant default for an empty list.
        fallback: Timeline<T>,
        /// Private timelines keyed by particle.
        per_particle: ParticleTimelines<T>,
        /// Per-tick lookups that found no private timeline.
        missed: u64,
    },
}

impl<T, S> AttributeTrack<T, S>
where
    T: Lerp + Clone,
    S: PickSource<T> + Clone,
{
    /// Shared track from an optional keyframe list, or a constant `default`.
    pub fn shared(list: Option<&ValueList<T>>, default: T) -> EmberResult<Self> {
        let timeline = match list {
            Some(list) => list.to_timeline()?,
            None => Timeline::constant(default),
        };
        Ok(Self::Shared(timeline))
    }

    /// Pick-list track. An empty list falls back to a constant `default`.
    pub fn pick(config: &PickList<S>, default: T, rng: &mut BehaviorRng) -> EmberResult<Self> {
        let template = PickTemplate::<S>::from_config::<T>(config)?;
        let fallback = template
            .first_only()
            .assign_random_list(rng)
            .unwrap_or_else(|| Timeline::constant(default));
        Ok(Self::Pick {
            template,
            fallback,
            per_particle: ParticleTimelines::new(),
            missed: 0,
        })
    }

    /// `true` for pick-list tracks.
    pub fn is_pick(&self) -> bool {
        matches!(self, Self::Pick { .. })
    }

    /// Prepare `id` and return its starting value.
    ///
    /// Pick-list tracks draw and cache the particle's private timeline here.
    pub fn init(&mut self, id: ParticleId, rng: &mut BehaviorRng) -> T {
        match self {
            Self::Shared(timeline) => timeline.first_value().clone(),
            Self::Pick {
                template,
                fallback,
                per_particle,
                ..
            } => match template.assign_random_list(rng) {
                Some(timeline) => {
                    let first = timeline.first_value().clone();
                    per_particle.insert(id, timeline);
                    first
                }
                None => fallback.first_value().clone(),
            },
        }
    }

    /// Value for `id` at `age`.
    ///
    /// A pick-list particle without a private timeline reads the fallback and the
    /// miss is counted.
    pub fn value_at(&mut self, id: ParticleId, age: f64) -> T {
        match self {
            Self::Shared(timeline) => timeline.interpolate(age),
            Self::Pick {
                fallback,
                per_particle,
                missed,
                ..
            } => match per_particle.get_mut(id) {
                Some(timeline) => timeline.interpolate(age),
                None => {
                    *missed += 1;
                    tracing::trace!(?id, "no private timeline for particle, using fallback");
                    fallback.interpolate(age)
                }
            },
        }
    }

    /// Drop private state for `id`.
    pub fn retire(&mut self, id: ParticleId) {
        if let Self::Pick { per_particle, .. } = self {
            per_particle.remove(id);
        }
    }

    /// Private timeline of `id`, if any.
    pub fn private_timeline(&self, id: ParticleId) -> Option<&Timeline<T>> {
        match self {
            Self::Shared(_) => None,
            Self::Pick { per_particle, .. } => per_particle.get(id),
        }
    }

    /// Number of cached private timelines.
    pub fn cached_timelines(&self) -> usize {
        match self {
            Self::Shared(_) => 0,
            Self::Pick { per_particle, .. } => per_particle.len(),
        }
    }

    /// Per-tick lookups that found no private timeline.
    pub fn missed_lookups(&self) -> u64 {
        match self {
            Self::Shared(_) => 0,
            Self::Pick { missed, .. } => *missed,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/behavior/track.rs"]
mod tests;
