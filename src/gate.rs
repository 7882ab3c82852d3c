//! Visibility-gated loading of the hero scene.
//!
//! The 3D scene behind the hero is by far the heaviest thing on the page, so
//! it is only fetched when it is about to be seen and the visitor has not
//! asked for reduced motion. This module is the model of that behaviour; the
//! browser runtime in `static/gate.js` follows the same transitions.
//!
//! ## States
//!
//! ```text
//!                 intersection ≥ threshold
//!   Placeholder ───────────────────────────▶ (intersected latch set)
//!        │                                          │
//!        │            reduced motion = false        │
//!        └──────────────────────────────────────────┴──▶ Asset (terminal)
//! ```
//!
//! - The *intersected* latch is one-shot: scrolling the hero out of view again
//!   never clears it.
//! - The view becomes [`GateView::Asset`] the first time *intersected* and
//!   *not reduced-motion* hold together, and stays there for the rest of the
//!   mounted lifetime.
//! - A reduced-motion preference that is true at mount keeps the placeholder
//!   for as long as the preference stays true, whatever the scroll position.
//!
//! ## Lifecycle
//!
//! [`MountedGate::mount`] asks a [`GateHost`] for two subscriptions: viewport
//! intersection of the container and changes of the reduced-motion preference.
//! Both are [`Subscription`] handles that unregister on drop, so unmounting (dropping
//! the gate) releases them unconditionally. The intersection subscription is
//! released early once the latch is set, since no further event can change
//! anything.
//!
//! If the host cannot observe intersection, the gate keeps the placeholder and
//! never retries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visible fraction of the container that counts as "on screen".
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Slack applied when comparing an observed ratio with the threshold.
///
/// Browsers report ratios such as `0.19999` for a crossing at `0.2`.
pub const RATIO_TOLERANCE: f64 = 1e-3;

/// What the gate currently renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateView {
    Placeholder,
    Asset,
}

impl GateView {
    /// Value of the `data-gate-state` attribute in the generated page.
    pub fn as_str(self) -> &'static str {
        match self {
            GateView::Placeholder => "placeholder",
            GateView::Asset => "asset",
        }
    }
}

impl fmt::Display for GateView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An observation delivered to the gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateEvent {
    /// The container's visible fraction changed.
    Intersection { ratio: f64 },
    /// The reduced-motion preference changed.
    ReducedMotion(bool),
}

/// Pure gate state.
#[derive(Debug, Clone, PartialEq)]
pub struct GateState {
    threshold: f64,
    reduced_motion: bool,
    intersected: bool,
    mounted: bool,
}

impl Default for GateState {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, false)
    }
}

impl GateState {
    pub fn new(threshold: f64, reduced_motion: bool) -> Self {
        Self {
            threshold,
            reduced_motion,
            intersected: false,
            mounted: false,
        }
    }

    pub fn view(&self) -> GateView {
        if self.mounted {
            GateView::Asset
        } else {
            GateView::Placeholder
        }
    }

    pub fn has_intersected(&self) -> bool {
        self.intersected
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Whether a ratio counts as a qualifying intersection.
    pub fn qualifies(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio + RATIO_TOLERANCE >= self.threshold
    }

    /// Apply an event. Returns the new view only when it changed.
    pub fn apply(&mut self, event: GateEvent) -> Option<GateView> {
        let before = self.view();
        match event {
            GateEvent::Intersection { ratio } => {
                if self.qualifies(ratio) {
                    self.intersected = true;
                }
            }
            GateEvent::ReducedMotion(reduced) => self.reduced_motion = reduced,
        }
        if self.intersected && !self.reduced_motion {
            self.mounted = true;
        }
        let after = self.view();
        (after != before).then_some(after)
    }
}

/// A registered observation. Dropping it unregisters exactly once.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Unregister now instead of at end of scope.
    pub fn release(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// The environment a gate is mounted into.
pub trait GateHost {
    /// Start observing the container's intersection with the viewport.
    ///
    /// Returns `None` when the mechanism is unavailable.
    fn observe_intersection(&mut self, threshold: f64) -> Option<Subscription>;

    /// Current reduced-motion preference and a subscription to its changes.
    fn watch_reduced_motion(&mut self) -> (bool, Subscription);
}

/// A gate bound to a host for its mounted lifetime.
#[derive(Debug)]
pub struct MountedGate {
    state: GateState,
    intersection: Option<Subscription>,
    _reduced_motion: Subscription,
}

impl MountedGate {
    pub fn mount<H: GateHost + ?Sized>(host: &mut H, threshold: f64) -> Self {
        let (reduced_motion, motion_sub) = host.watch_reduced_motion();
        let intersection = host.observe_intersection(threshold);
        if intersection.is_none() {
            tracing::debug!("intersection observation unavailable, keeping placeholder");
        }
        Self {
            state: GateState::new(threshold, reduced_motion),
            intersection,
            _reduced_motion: motion_sub,
        }
    }

    pub fn view(&self) -> GateView {
        self.state.view()
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// Whether the intersection subscription is still held.
    pub fn is_observing(&self) -> bool {
        self.intersection.is_some()
    }

    /// Deliver an event from one of the subscriptions.
    pub fn handle(&mut self, event: GateEvent) -> Option<GateView> {
        if matches!(event, GateEvent::Intersection { .. }) && self.intersection.is_none() {
            return None;
        }
        let changed = self.state.apply(event);
        if self.state.has_intersected() {
            if let Some(sub) = self.intersection.take() {
                sub.release();
            }
        }
        if let Some(view) = changed {
            tracing::debug!(%view, "scene gate changed view");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records register/unregister calls in order.
    struct FakeHost {
        log: Rc<RefCell<Vec<&'static str>>>,
        reduced_motion: bool,
        observer_available: bool,
    }

    impl FakeHost {
        fn new(reduced_motion: bool) -> Self {
            Self {
                log: Rc::new(RefCell::new(Vec::new())),
                reduced_motion,
                observer_available: true,
            }
        }

        fn log(&self) -> Vec<&'static str> {
            self.log.borrow().clone()
        }
    }

    impl GateHost for FakeHost {
        fn observe_intersection(&mut self, _threshold: f64) -> Option<Subscription> {
            if !self.observer_available {
                return None;
            }
            self.log.borrow_mut().push("observe");
            let log = Rc::clone(&self.log);
            Some(Subscription::new(move || log.borrow_mut().push("unobserve")))
        }

        fn watch_reduced_motion(&mut self) -> (bool, Subscription) {
            self.log.borrow_mut().push("listen");
            let log = Rc::clone(&self.log);
            (
                self.reduced_motion,
                Subscription::new(move || log.borrow_mut().push("unlisten")),
            )
        }
    }

    fn seen(ratio: f64) -> GateEvent {
        GateEvent::Intersection { ratio }
    }

    // =========================================================================
    // GateState
    // =========================================================================

    #[test]
    fn starts_as_placeholder() {
        assert_eq!(GateState::default().view(), GateView::Placeholder);
    }

    #[test]
    fn below_threshold_does_not_latch() {
        let mut state = GateState::new(0.2, false);
        assert_eq!(state.apply(seen(0.1)), None);
        assert!(!state.has_intersected());
        assert_eq!(state.view(), GateView::Placeholder);
    }

    #[test]
    fn qualifying_intersection_mounts_asset() {
        let mut state = GateState::new(0.2, false);
        assert_eq!(state.apply(seen(0.25)), Some(GateView::Asset));
        assert_eq!(state.view(), GateView::Asset);
    }

    #[test]
    fn ratio_just_below_threshold_counts() {
        let mut state = GateState::new(0.2, false);
        assert_eq!(state.apply(seen(0.1999)), Some(GateView::Asset));
    }

    #[test]
    fn zero_ratio_never_qualifies() {
        let state = GateState::new(0.0005, false);
        assert!(!state.qualifies(0.0));
    }

    #[test]
    fn asset_stays_after_scroll_out() {
        let mut state = GateState::new(0.2, false);
        state.apply(seen(0.5));
        assert_eq!(state.apply(seen(0.0)), None);
        assert_eq!(state.view(), GateView::Asset);
    }

    #[test]
    fn reduced_motion_at_mount_blocks_asset() {
        let mut state = GateState::new(0.2, true);
        for ratio in [0.2, 0.5, 1.0, 0.0, 0.8] {
            assert_eq!(state.apply(seen(ratio)), None);
        }
        assert!(state.has_intersected());
        assert_eq!(state.view(), GateView::Placeholder);
    }

    #[test]
    fn reduced_motion_cleared_after_latch_mounts() {
        let mut state = GateState::new(0.2, true);
        state.apply(seen(0.4));
        state.apply(seen(0.0));
        // Latch survived the scroll-out; clearing the preference mounts.
        assert_eq!(state.apply(GateEvent::ReducedMotion(false)), Some(GateView::Asset));
    }

    #[test]
    fn reduced_motion_after_mount_keeps_asset() {
        let mut state = GateState::new(0.2, false);
        state.apply(seen(1.0));
        assert_eq!(state.apply(GateEvent::ReducedMotion(true)), None);
        assert_eq!(state.view(), GateView::Asset);
    }

    #[test]
    fn preference_toggle_without_intersection_keeps_placeholder() {
        let mut state = GateState::new(0.2, true);
        assert_eq!(state.apply(GateEvent::ReducedMotion(false)), None);
        assert_eq!(state.apply(GateEvent::ReducedMotion(true)), None);
        assert_eq!(state.view(), GateView::Placeholder);
    }

    #[test]
    fn asset_reported_exactly_once() {
        let mut state = GateState::new(0.2, false);
        let changes: Vec<_> = [seen(0.3), seen(0.9), seen(0.0), seen(0.6)]
            .into_iter()
            .filter_map(|e| state.apply(e))
            .collect();
        assert_eq!(changes, vec![GateView::Asset]);
    }

    #[test]
    fn view_attribute_values() {
        assert_eq!(GateView::Placeholder.as_str(), "placeholder");
        assert_eq!(GateView::Asset.to_string(), "asset");
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    #[test]
    fn subscription_releases_once_on_drop() {
        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        let sub = Subscription::new(move || *c.borrow_mut() += 1);
        drop(sub);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn explicit_release_runs_callback() {
        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        Subscription::new(move || *c.borrow_mut() += 1).release();
        assert_eq!(*count.borrow(), 1);
    }

    // =========================================================================
    // MountedGate lifecycle
    // =========================================================================

    #[test]
    fn mount_registers_both_subscriptions() {
        let mut host = FakeHost::new(false);
        let gate = MountedGate::mount(&mut host, 0.2);
        assert_eq!(host.log(), vec!["listen", "observe"]);
        assert!(gate.is_observing());
        assert_eq!(gate.view(), GateView::Placeholder);
    }

    #[test]
    fn unmount_releases_everything() {
        let mut host = FakeHost::new(false);
        let gate = MountedGate::mount(&mut host, 0.2);
        drop(gate);
        let log = host.log();
        assert!(log.contains(&"unobserve"));
        assert!(log.contains(&"unlisten"));
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn latch_releases_observer_early() {
        let mut host = FakeHost::new(false);
        let mut gate = MountedGate::mount(&mut host, 0.2);
        assert_eq!(gate.handle(seen(0.5)), Some(GateView::Asset));
        assert!(!gate.is_observing());
        assert_eq!(host.log(), vec!["listen", "observe", "unobserve"]);

        drop(gate);
        // The observer is not released a second time.
        assert_eq!(host.log(), vec!["listen", "observe", "unobserve", "unlisten"]);
    }

    #[test]
    fn reduced_motion_read_at_mount() {
        let mut host = FakeHost::new(true);
        let mut gate = MountedGate::mount(&mut host, 0.2);
        assert!(gate.state().reduced_motion());
        assert_eq!(gate.handle(seen(1.0)), None);
        assert_eq!(gate.view(), GateView::Placeholder);
        assert_eq!(
            gate.handle(GateEvent::ReducedMotion(false)),
            Some(GateView::Asset)
        );
    }

    #[test]
    fn unavailable_observer_keeps_placeholder() {
        let mut host = FakeHost::new(false);
        host.observer_available = false;
        let mut gate = MountedGate::mount(&mut host, 0.2);
        assert!(!gate.is_observing());
        // Stray intersection events are ignored without an observer.
        assert_eq!(gate.handle(seen(1.0)), None);
        assert_eq!(gate.handle(GateEvent::ReducedMotion(false)), None);
        assert_eq!(gate.view(), GateView::Placeholder);

        drop(gate);
        assert_eq!(host.log(), vec!["listen", "unlisten"]);
    }
}
