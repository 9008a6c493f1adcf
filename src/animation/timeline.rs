use crate::{
    animation::ease::Easing,
    foundation::core::Rgb8,
    foundation::error::{EmberError, EmberResult},
};

/// Interpolation contract for timeline value kinds.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Rgb8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }
}

/// One `(time, value)` sample of a timeline.
#[derive(Clone, Debug)]
pub struct KeyframeNode<T> {
    /// Age fraction in `[0, 1]` at which `value` applies.
    pub time: f64,
    /// Value at `time`.
    pub value: T,
    /// Easing applied toward the next node. `None` inherits the head node's.
    pub ease: Option<Easing>,
    /// Hold `value` until the next node instead of blending.
    pub stepped: bool,
}

impl<T> KeyframeNode<T> {
    /// Plain linear node.
    pub fn new(time: f64, value: T) -> Self {
        Self {
            time,
            value,
            ease: None,
            stepped: false,
        }
    }

    /// Attach an easing function.
    pub fn with_ease(mut self, ease: Option<Easing>) -> Self {
        self.ease = ease;
        self
    }

    /// Set the stepped flag.
    pub fn with_stepped(mut self, stepped: bool) -> Self {
        self.stepped = stepped;
        self
    }
}

/// Ordered keyframes plus a forward-only evaluation cursor.
///
/// Easing and stepping are read from the active node when it carries them and
/// otherwise from the head node, so list-level settings stored on the first node
/// govern every segment.
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    nodes: Vec<KeyframeNode<T>>, // sorted by time, never empty
    cursor: usize,
}

impl<T> Timeline<T>
where
    T: Lerp + Clone,
{
    /// Timeline that always yields `value`.
    pub fn constant(value: T) -> Self {
        Self {
            nodes: vec![KeyframeNode::new(0.0, value)],
            cursor: 0,
        }
    }

    /// Build from explicit nodes, validating that they are non-empty and sorted.
    pub fn from_nodes(nodes: Vec<KeyframeNode<T>>) -> EmberResult<Self> {
        if nodes.is_empty() {
            return Err(EmberError::animation(
                "timeline must have at least one keyframe",
            ));
        }
        if nodes.iter().any(|n| !n.time.is_finite()) {
            return Err(EmberError::animation("keyframe times must be finite"));
        }
        if !nodes.windows(2).all(|w| w[0].time <= w[1].time) {
            return Err(EmberError::animation(
                "keyframes must be sorted by time",
            ));
        }
        Ok(Self { nodes, cursor: 0 })
    }

    /// Value of the head node.
    pub fn first_value(&self) -> &T {
        &self.nodes[0].value
    }

    /// All nodes in time order.
    pub fn nodes(&self) -> &[KeyframeNode<T>] {
        &self.nodes
    }

    /// Number of keyframes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; a timeline holds at least one keyframe.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Rewind the cursor to the head node.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Evaluate at age fraction `age`.
    ///
    /// Ages before the head clamp to the first value and ages at or past the last
    /// keyframe clamp to the last value. Evaluating at an age earlier than the
    /// cursor rewinds it.
    pub fn interpolate(&mut self, age: f64) -> T {
        let head = &self.nodes[0];
        if self.cursor >= self.nodes.len() || age < self.nodes[self.cursor].time {
            self.cursor = 0;
        }
        if age < head.time || age.is_nan() {
            return head.value.clone();
        }

        while let Some(next) = self.nodes.get(self.cursor + 1) {
            if next.time > age {
                break;
            }
            self.cursor += 1;
        }

        let cur = &self.nodes[self.cursor];
        let Some(next) = self.nodes.get(self.cursor + 1) else {
            return cur.value.clone();
        };

        if cur.stepped || head.stepped {
            return cur.value.clone();
        }

        let span = next.time - cur.time;
        let mut f = if span <= 0.0 {
            1.0
        } else {
            (age - cur.time) / span
        };
        if let Some(ease) = cur.ease.as_ref().or(head.ease.as_ref()) {
            f = ease.apply(f);
        }
        T::lerp(&cur.value, &next.value, f)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
