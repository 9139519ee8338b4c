//! One-shot reveal-on-view state.
//!
//! Each section owns a [`RevealLatch`]. The latch fires the first time the
//! section is observed inside the viewport and ignores every later
//! observation, so a revealed section never hides again while the page is
//! mounted. Reveal is cosmetic: with motion disabled every section is
//! reported as settled regardless of the latch.

use std::collections::HashMap;
use std::ops::Range;

use crate::page::SectionId;

/// Motion parameters for the reveal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealMotion {
    /// When false, nothing is ever hidden or offset.
    pub enabled: bool,
    /// Length of the transition in frame ticks
    pub duration_ticks: u64,
    /// Rows a block starts below its settled position
    pub offset_rows: u16,
    /// Rows of a block that must be inside the viewport to count as in view
    pub margin_rows: u16,
}

impl Default for RevealMotion {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ticks: 10,
            offset_rows: 1,
            margin_rows: 2,
        }
    }
}

impl RevealMotion {
    /// Motion with the transition switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Visual phase of a block at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not yet seen: drawn blank, height preserved
    Hidden,
    /// Transitioning: drawn `offset` rows low and dimmed
    Entering { offset: u16 },
    /// Fully visible in its final position
    Settled,
}

/// Fires at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed_at: Option<u64>,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one viewport observation.
    ///
    /// Returns true only for the observation that trips the latch.
    pub fn observe(&mut self, in_view: bool, tick: u64) -> bool {
        if self.revealed_at.is_some() || !in_view {
            return false;
        }
        self.revealed_at = Some(tick);
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    pub fn revealed_at(&self) -> Option<u64> {
        self.revealed_at
    }

    pub fn phase(&self, now: u64, motion: &RevealMotion) -> RevealPhase {
        if !motion.enabled {
            return RevealPhase::Settled;
        }
        let Some(start) = self.revealed_at else {
            return RevealPhase::Hidden;
        };
        let elapsed = now.saturating_sub(start);
        if elapsed >= motion.duration_ticks || motion.offset_rows == 0 {
            return RevealPhase::Settled;
        }
        let remaining = motion.duration_ticks - elapsed;
        let rows = u64::from(motion.offset_rows) * remaining;
        let offset = rows.div_ceil(motion.duration_ticks);
        RevealPhase::Entering {
            offset: u16::try_from(offset).unwrap_or(motion.offset_rows),
        }
    }
}

/// True when `block` shows at least `margin` rows inside `viewport`.
///
/// The requirement is capped by the block height and by the viewport height,
/// so a short block or a short terminal still reveals once a row shows.
pub fn in_view(block: &Range<usize>, viewport: &Range<usize>, margin: usize) -> bool {
    let start = block.start.max(viewport.start);
    let end = block.end.min(viewport.end);
    if end <= start {
        return false;
    }
    let visible = end - start;
    visible >= margin.min(block.len()).min(viewport.len()).max(1)
}

/// Latches for every section on the page.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    latches: HashMap<SectionId, RevealLatch>,
    motion: RevealMotion,
}

impl RevealTracker {
    pub fn new(motion: RevealMotion) -> Self {
        Self {
            latches: HashMap::new(),
            motion,
        }
    }

    pub fn motion(&self) -> &RevealMotion {
        &self.motion
    }

    /// Observe one section. Returns true if this observation revealed it.
    pub fn observe(&mut self, section: SectionId, in_view: bool, tick: u64) -> bool {
        let fired = self.latches.entry(section).or_default().observe(in_view, tick);
        if fired {
            tracing::debug!(section = section.anchor(), tick, "section revealed");
        }
        fired
    }

    /// Observe every section range against the viewport.
    ///
    /// Returns the sections revealed by this pass.
    pub fn observe_viewport(
        &mut self,
        sections: &[(SectionId, Range<usize>)],
        viewport: &Range<usize>,
        tick: u64,
    ) -> Vec<SectionId> {
        let margin = usize::from(self.motion.margin_rows);
        sections
            .iter()
            .filter(|(id, range)| self.observe(*id, in_view(range, viewport, margin), tick))
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.latches
            .get(&section)
            .is_some_and(RevealLatch::is_revealed)
    }

    pub fn phase(&self, section: SectionId, now: u64) -> RevealPhase {
        self.latches
            .get(&section)
            .copied()
            .unwrap_or_default()
            .phase(now, &self.motion)
    }

    /// True while any revealed section is still mid-transition.
    pub fn is_animating(&self, now: u64) -> bool {
        self.motion.enabled
            && self
                .latches
                .values()
                .any(|latch| matches!(latch.phase(now, &self.motion), RevealPhase::Entering { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false, 0));
        assert!(latch.observe(true, 3));
        assert!(!latch.observe(true, 4));
        assert!(!latch.observe(false, 5));
        assert!(!latch.observe(true, 6));
        assert_eq!(latch.revealed_at(), Some(3));
    }

    #[test]
    fn test_phase_progression() {
        let motion = RevealMotion {
            enabled: true,
            duration_ticks: 4,
            offset_rows: 2,
            margin_rows: 1,
        };
        let mut latch = RevealLatch::new();
        assert_eq!(latch.phase(0, &motion), RevealPhase::Hidden);

        latch.observe(true, 10);
        assert_eq!(latch.phase(10, &motion), RevealPhase::Entering { offset: 2 });
        assert_eq!(latch.phase(12, &motion), RevealPhase::Entering { offset: 1 });
        assert_eq!(latch.phase(13, &motion), RevealPhase::Entering { offset: 1 });
        assert_eq!(latch.phase(14, &motion), RevealPhase::Settled);
        assert_eq!(latch.phase(1_000, &motion), RevealPhase::Settled);
    }

    #[test]
    fn test_disabled_motion_is_always_settled() {
        let latch = RevealLatch::new();
        assert_eq!(
            latch.phase(0, &RevealMotion::disabled()),
            RevealPhase::Settled
        );
    }

    #[test]
    fn test_in_view_margin() {
        let viewport = 10..20;
        assert!(!in_view(&(0..10), &viewport, 2));
        assert!(!in_view(&(19..40), &viewport, 2));
        assert!(in_view(&(18..40), &viewport, 2));
        assert!(in_view(&(0..11), &viewport, 1));
        // Shorter than the margin but fully inside
        assert!(in_view(&(12..13), &viewport, 4));
        assert!(!in_view(&(5..5), &viewport, 1));
    }

    #[test]
    fn test_viewport_shorter_than_margin() {
        // A one-row viewport can never show two rows of anything
        assert!(in_view(&(0..30), &(7..8), 2));
        assert!(in_view(&(7..30), &(7..8), 3));
        assert!(!in_view(&(8..30), &(7..8), 2));
    }

    #[test]
    fn test_tracker_reports_only_new_reveals() {
        let mut tracker = RevealTracker::new(RevealMotion::default());
        let sections = vec![(SectionId::About, 0..5), (SectionId::Skills, 5..30)];

        let first = tracker.observe_viewport(&sections, &(0..10), 0);
        assert_eq!(first, vec![SectionId::About, SectionId::Skills]);

        let again = tracker.observe_viewport(&sections, &(0..10), 1);
        assert!(again.is_empty());

        // Scrolling away and back does not re-hide or re-fire
        tracker.observe_viewport(&sections, &(40..50), 2);
        assert!(tracker.is_revealed(SectionId::About));
        assert!(tracker.observe_viewport(&sections, &(0..10), 3).is_empty());
    }

    #[test]
    fn test_tracker_animation_window() {
        let mut tracker = RevealTracker::new(RevealMotion::default());
        assert!(!tracker.is_animating(0));
        tracker.observe(SectionId::Contact, true, 0);
        assert!(tracker.is_animating(1));
        assert!(!tracker.is_animating(100));
        assert_eq!(tracker.phase(SectionId::About, 100), RevealPhase::Hidden);
    }
}
