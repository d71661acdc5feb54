// Host-side tests for viewport reveal state and batch ordering.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod presentation {
        include!("../src/core/presentation.rs");
    }
    pub mod revealer {
        include!("../src/core/revealer.rs");
    }
}

use crate::core::presentation::{Opacity, Presentation};
use crate::core::revealer::*;
use smallvec::smallvec;

const A: ElementId = ElementId(0);
const B: ElementId = ElementId(1);

fn rec(id: ElementId, is_intersecting: bool) -> IntersectionRecord {
    IntersectionRecord::new(id, is_intersecting)
}

#[test]
fn elements_start_not_intersecting() {
    let r = Revealer::with_count(3);
    assert_eq!(r.len(), 3);
    for i in 0..3 {
        assert_eq!(r.state(ElementId(i)), Some(Presentation::default()));
    }
    assert_eq!(r.state(ElementId(3)), None);
}

#[test]
fn enter_sets_active_without_touching_opacity() {
    let mut r = Revealer::with_count(1);
    let reveal = r.apply_record(rec(A, true)).unwrap();
    assert_eq!(reveal.transition, Transition::Enter);
    assert!(reveal.active);
    assert_eq!(reveal.opacity, None);
    let state = r.state(A).unwrap();
    assert!(state.active);
    assert_eq!(state.opacity, Opacity::Inherited);
}

#[test]
fn leave_clears_active_and_forces_transparent() {
    let mut r = Revealer::with_count(1);
    r.apply_record(rec(A, true));
    let reveal = r.apply_record(rec(A, false)).unwrap();
    assert_eq!(reveal.transition, Transition::Leave);
    assert!(!reveal.active);
    assert_eq!(reveal.opacity, Some(Opacity::Transparent));
    assert_eq!(
        r.state(A),
        Some(Presentation {
            active: false,
            opacity: Opacity::Transparent
        })
    );
}

#[test]
fn records_in_a_batch_are_independent_of_order() {
    let mut forward = Revealer::with_count(2);
    let mut backward = Revealer::with_count(2);
    forward.apply_batch(&[rec(A, true), rec(B, false)]);
    backward.apply_batch(&[rec(B, false), rec(A, true)]);

    for r in [&forward, &backward] {
        let a = r.state(A).unwrap();
        let b = r.state(B).unwrap();
        assert!(a.active);
        assert_eq!(a.opacity, Opacity::Inherited);
        assert!(!b.active);
        assert_eq!(b.opacity, Opacity::Transparent);
    }
}

#[test]
fn enter_leave_enter_forces_opacity_once() {
    let mut r = Revealer::with_count(1);
    let mut forced = Vec::new();
    for (step, visible) in [true, false, true].into_iter().enumerate() {
        let reveal = r.apply_record(rec(A, visible)).unwrap();
        if reveal.opacity == Some(Opacity::Transparent) {
            forced.push(step);
        }
    }
    assert_eq!(forced, vec![1]);
    assert!(r.state(A).unwrap().active);
}

#[test]
fn unobserved_elements_are_ignored() {
    // Two elements captured at setup; a third appears later.
    let mut r = Revealer::with_count(2);
    let late = ElementId(2);
    assert_eq!(r.apply_record(rec(late, true)), None);
    let reveals = r.apply_batch(&[rec(late, true), rec(A, true)]);
    assert_eq!(reveals.len(), 1);
    assert_eq!(reveals[0].id, A);
    assert_eq!(r.len(), 2);
    assert_eq!(r.state(late), None);
}

#[test]
fn queue_applies_batches_in_arrival_order() {
    let mut r = Revealer::with_count(2);
    let mut q = BatchQueue::new();
    q.push(smallvec![rec(A, true), rec(B, true)]);
    q.push(smallvec![rec(A, false)]);
    q.push(smallvec![rec(A, true)]);
    assert_eq!(q.len(), 3);

    let mut seen: Vec<Vec<(ElementId, Transition)>> = Vec::new();
    q.drain_into(&mut r, |reveals| {
        seen.push(reveals.iter().map(|x| (x.id, x.transition)).collect());
    });

    assert!(q.is_empty());
    assert_eq!(
        seen,
        vec![
            vec![(A, Transition::Enter), (B, Transition::Enter)],
            vec![(A, Transition::Leave)],
            vec![(A, Transition::Enter)],
        ]
    );
    let a = r.state(A).unwrap();
    assert!(a.active);
    assert_eq!(a.opacity, Opacity::Transparent);
    assert!(r.state(B).unwrap().active);
}

#[test]
fn empty_batch_projects_nothing() {
    let mut r = Revealer::with_count(1);
    let mut q = BatchQueue::new();
    q.push(IntersectionBatch::new());
    let mut calls = 0;
    q.drain_into(&mut r, |reveals| {
        assert!(reveals.is_empty());
        calls += 1;
    });
    assert_eq!(calls, 1);
    assert_eq!(r.state(A), Some(Presentation::default()));
}
