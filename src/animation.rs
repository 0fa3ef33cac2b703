//! Animation commands and a deterministic timeline.
//!
//! Styling never drives a display loop itself. Components describe the
//! motion they want as an [`AnimationCommand`] and hand it to an
//! [`Animator`]; the host decides when time passes and reports completed
//! animations back.
//!
//! [`Timeline`] is an in-process animator that advances only when told to,
//! which makes transitions testable without a clock.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Easing function type: takes progress (0.0 to 1.0) and returns eased value (0.0 to 1.0)
pub type EasingFn = fn(f64) -> f64;

/// Linear interpolation (no easing)
pub fn linear(t: f64) -> f64 {
    t
}

/// Ease in (quadratic) - slow start, accelerating
pub fn ease_in(t: f64) -> f64 {
    t * t
}

/// Ease out (quadratic) - fast start, decelerating
pub fn ease_out(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Ease in-out (quadratic) - slow start and end, fast middle
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Linearly interpolate between two values
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

named_enum! {
    /// Named easing curves.
    #[derive(Default)]
    Easing as "easing" {
        Linear => "linear",
        EaseIn => "ease-in",
        EaseOut => "ease-out",
        #[default]
        EaseInOut => "ease-in-out",
    }
}

impl Easing {
    pub fn function(self) -> EasingFn {
        match self {
            Easing::Linear => linear,
            Easing::EaseIn => ease_in,
            Easing::EaseOut => ease_out,
            Easing::EaseInOut => ease_in_out,
        }
    }

    /// Applies the curve to a progress value, clamped to `0.0..=1.0`.
    pub fn apply(self, t: f64) -> f64 {
        (self.function())(t.clamp(0.0, 1.0))
    }
}

/// A request to animate one value.
///
/// `from: None` means "start wherever the value currently is", which is
/// what retargeting an in-flight animation needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationCommand {
    #[serde(default)]
    pub from: Option<f64>,
    pub to: f64,
    pub duration_ms: u32,
    #[serde(default)]
    pub easing: Easing,
}

impl AnimationCommand {
    /// Animates to `to` from the current value over 250ms.
    pub fn to(to: f64) -> Self {
        Self {
            from: None,
            to,
            duration_ms: 250,
            easing: Easing::default(),
        }
    }

    pub fn from(mut self, from: f64) -> Self {
        self.from = Some(from);
        self
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Identifies one submitted animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationId(u64);

impl AnimationId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The animation subsystem a component submits commands to.
///
/// Animations are addressed by track name. Submitting to a track that is
/// already animating retargets it: the previous animation is dropped and
/// never reported complete.
pub trait Animator {
    /// Starts animating `track`, returning an id the completion will carry.
    fn submit(&mut self, track: &str, command: AnimationCommand) -> AnimationId;

    /// Current value of a track, if it has ever been animated.
    fn value(&self, track: &str) -> Option<f64>;
}

#[derive(Debug, Clone)]
struct Active {
    id: AnimationId,
    from: f64,
    to: f64,
    duration_ms: u32,
    elapsed_ms: u32,
    easing: Easing,
}

#[derive(Debug, Clone)]
struct Track {
    value: f64,
    active: Option<Active>,
}

/// A deterministic [`Animator`] advanced explicitly by the host.
///
/// # Example
///
/// ```rust
/// use livery::{AnimationCommand, Animator, Easing, Timeline};
///
/// let mut timeline = Timeline::new();
/// let id = timeline.submit("fade", AnimationCommand::to(1.0).from(0.0).duration_ms(100).easing(Easing::Linear));
///
/// assert!(timeline.advance(50).is_empty());
/// assert_eq!(timeline.value("fade"), Some(0.5));
/// assert_eq!(timeline.advance(50), vec![id]);
/// assert_eq!(timeline.value("fade"), Some(1.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    next_id: u64,
    tracks: BTreeMap<String, Track>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the track has an animation in flight.
    pub fn is_running(&self, track: &str) -> bool {
        self.tracks
            .get(track)
            .is_some_and(|t| t.active.is_some())
    }

    /// Advances every running animation by `elapsed_ms`.
    ///
    /// Returns the ids of animations that reached their end value, in track
    /// name order.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<AnimationId> {
        let mut finished = Vec::new();

        for track in self.tracks.values_mut() {
            let Some(active) = track.active.as_mut() else {
                continue;
            };

            active.elapsed_ms = active.elapsed_ms.saturating_add(elapsed_ms);
            if active.elapsed_ms >= active.duration_ms {
                track.value = active.to;
                finished.push(active.id);
                track.active = None;
                continue;
            }

            let t = f64::from(active.elapsed_ms) / f64::from(active.duration_ms);
            track.value = lerp(active.from, active.to, active.easing.apply(t));
        }

        finished
    }
}

impl Animator for Timeline {
    fn submit(&mut self, track: &str, command: AnimationCommand) -> AnimationId {
        self.next_id += 1;
        let id = AnimationId(self.next_id);

        let entry = self.tracks.entry(track.to_string()).or_insert(Track {
            value: command.from.unwrap_or(command.to),
            active: None,
        });

        if entry.active.is_some() {
            tracing::debug!(track, "retargeting in-flight animation");
        }

        let from = command.from.unwrap_or(entry.value);
        entry.value = from;
        entry.active = Some(Active {
            id,
            from,
            to: command.to,
            duration_ms: command.duration_ms,
            elapsed_ms: 0,
            easing: command.easing,
        });

        id
    }

    fn value(&self, track: &str) -> Option<f64> {
        self.tracks.get(track).map(|t| t.value)
    }
}
