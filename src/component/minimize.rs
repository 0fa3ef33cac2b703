//! Header minimization.
//!
//! The controller owns the header's two-state machine. State changes are
//! synchronous; the visual transition is delegated to an [`Animator`] and
//! the matching callback fires once the host reports that animation done.

use serde::Serialize;

use crate::animation::{AnimationCommand, AnimationId, Animator, Easing};
use crate::style::StyleTree;

use super::{Animate, Header, ResolvedHeader, StyleContext};

pub const MINIMIZE_DURATION_MS: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Minimization {
    Expanded,
    Minimized,
}

impl Minimization {
    /// Track value at rest in this state.
    pub fn progress(self) -> f64 {
        match self {
            Minimization::Expanded => 0.0,
            Minimization::Minimized => 1.0,
        }
    }
}

/// Drives a [`Header`] between expanded and minimized.
///
/// # Example
///
/// ```rust
/// use livery::{Header, HeaderController, Timeline};
///
/// let mut timeline = Timeline::new();
/// let mut controller = HeaderController::new(Header::new("Inbox"));
///
/// controller.minimize(&mut timeline);
/// assert!(controller.is_minimized());
///
/// for id in timeline.advance(250) {
///     controller.finish(id);
/// }
/// assert_eq!(controller.progress(&timeline), 1.0);
/// ```
pub struct HeaderController {
    header: Header,
    state: Minimization,
    pending: Option<AnimationId>,
    on_minimized: Option<Box<dyn FnMut()>>,
    on_maximized: Option<Box<dyn FnMut()>>,
}

impl std::fmt::Debug for HeaderController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderController")
            .field("header", &self.header)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl HeaderController {
    pub fn new(mut header: Header) -> Self {
        let state = if header.is_minimized_initially() {
            Minimization::Minimized
        } else {
            Minimization::Expanded
        };
        Self {
            on_minimized: header.on_minimized.take(),
            on_maximized: header.on_maximized.take(),
            header,
            state,
            pending: None,
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn state(&self) -> Minimization {
        self.state
    }

    pub fn is_minimized(&self) -> bool {
        self.state == Minimization::Minimized
    }

    /// Whether a transition is waiting on its animation.
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn minimize(&mut self, animator: &mut dyn Animator) -> Minimization {
        self.transition(animator, Minimization::Minimized)
    }

    pub fn maximize(&mut self, animator: &mut dyn Animator) -> Minimization {
        self.transition(animator, Minimization::Expanded)
    }

    fn transition(&mut self, animator: &mut dyn Animator, target: Minimization) -> Minimization {
        if self.state == target {
            return self.state;
        }

        // An idle track starts from the rest position of the state being left;
        // an in-flight one continues from wherever it is.
        let from = match self.pending {
            Some(_) => None,
            None => Some(self.state.progress()),
        };
        self.state = target;

        let command = AnimationCommand {
            from,
            to: target.progress(),
            duration_ms: MINIMIZE_DURATION_MS,
            easing: Easing::EaseInOut,
        };
        let id = self.header.animate(animator, command);
        tracing::debug!(track = %self.header.animation_track(), state = ?target, id = id.raw(), "header transition");
        self.pending = Some(id);

        self.state
    }

    /// Reports a completed animation.
    ///
    /// Fires the callback for the current state if `id` is the transition in
    /// flight and returns that state. Ids of superseded or foreign animations
    /// are ignored.
    pub fn finish(&mut self, id: AnimationId) -> Option<Minimization> {
        if self.pending != Some(id) {
            tracing::debug!(id = id.raw(), "ignoring completion of superseded animation");
            return None;
        }
        self.pending = None;

        let callback = match self.state {
            Minimization::Minimized => self.on_minimized.as_mut(),
            Minimization::Expanded => self.on_maximized.as_mut(),
        };
        if let Some(callback) = callback {
            callback();
        }
        Some(self.state)
    }

    /// Current minimization progress, 0 expanded to 1 minimized.
    pub fn progress(&self, animator: &dyn Animator) -> f64 {
        animator
            .value(&self.header.animation_track())
            .unwrap_or_else(|| self.state.progress())
    }

    /// Resolves the header at its current progress.
    pub fn resolve(
        &self,
        ctx: &StyleContext<'_>,
        animator: &dyn Animator,
        overrides: Option<&StyleTree>,
    ) -> ResolvedHeader {
        self.header.resolve_at(ctx, self.progress(animator), overrides)
    }
}
