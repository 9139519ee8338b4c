//! Integration tests for reveal-on-view.
//!
//! A section reveals the first time it is observed in view and never hides
//! again. With reduced motion nothing is ever hidden.

use folio::page::SectionId;
use folio::state::{in_view, RevealLatch, RevealMotion, RevealPhase, RevealTracker};

fn motion() -> RevealMotion {
    RevealMotion {
        enabled: true,
        duration_ticks: 4,
        offset_rows: 2,
        margin_rows: 2,
    }
}

#[test]
fn test_latch_fires_once() {
    let mut latch = RevealLatch::new();
    assert!(!latch.observe(false, 0));
    assert!(latch.observe(true, 1));
    assert!(!latch.observe(true, 2));
    assert!(!latch.observe(false, 3));
    assert!(latch.is_revealed());
    assert_eq!(latch.revealed_at(), Some(1));
}

#[test]
fn test_revealed_section_never_hides_again() {
    let mut tracker = RevealTracker::new(motion());
    let sections = vec![(SectionId::About, 10..20), (SectionId::Skills, 20..40)];

    let revealed = tracker.observe_viewport(&sections, &(0..15), 0);
    assert_eq!(revealed, vec![SectionId::About]);

    // Scrolled far past: About leaves the viewport but stays revealed
    let revealed = tracker.observe_viewport(&sections, &(30..45), 1);
    assert_eq!(revealed, vec![SectionId::Skills]);
    assert!(tracker.is_revealed(SectionId::About));

    let revealed = tracker.observe_viewport(&sections, &(10..25), 2);
    assert!(revealed.is_empty());
}

#[test]
fn test_phase_progression() {
    let mut tracker = RevealTracker::new(motion());
    assert_eq!(tracker.phase(SectionId::Projects, 0), RevealPhase::Hidden);

    tracker.observe(SectionId::Projects, true, 10);
    assert_eq!(
        tracker.phase(SectionId::Projects, 10),
        RevealPhase::Entering { offset: 2 }
    );
    assert_eq!(
        tracker.phase(SectionId::Projects, 12),
        RevealPhase::Entering { offset: 1 }
    );
    assert_eq!(tracker.phase(SectionId::Projects, 14), RevealPhase::Settled);
    assert!(!tracker.is_animating(14));
}

#[test]
fn test_reduced_motion_is_always_settled() {
    let tracker = RevealTracker::new(RevealMotion::disabled());
    for section in SectionId::ALL {
        assert_eq!(tracker.phase(section, 0), RevealPhase::Settled);
    }
    assert!(!tracker.is_animating(0));
}

#[test]
fn test_in_view_margin() {
    // One row showing is not enough with a two-row margin
    assert!(!in_view(&(10..20), &(0..11), 2));
    assert!(in_view(&(10..20), &(0..12), 2));
    // A block shorter than the margin counts once fully visible
    assert!(in_view(&(5..6), &(0..10), 2));
    assert!(!in_view(&(20..30), &(0..20), 0));
}
