// Scroll-driven reveal state for a fixed set of observed elements.
//
// Intersection notifications arrive as [`IntersectionRecord`] messages grouped
// into batches. Batches are queued in arrival order and each one is applied in
// full before the next. Records inside a batch touch disjoint elements, so
// their order within the batch does not matter.

use super::presentation::{Opacity, Presentation};
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Position of an element in the setup-time snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntersectionRecord {
    pub id: ElementId,
    pub is_intersecting: bool,
}

impl IntersectionRecord {
    pub fn new(id: ElementId, is_intersecting: bool) -> Self {
        Self {
            id,
            is_intersecting,
        }
    }
}

pub type IntersectionBatch = SmallVec<[IntersectionRecord; 8]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Enter,
    Leave,
}

/// What the web layer must write for one applied record. `opacity` is only
/// set on leave; entering leaves opacity to the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub id: ElementId,
    pub transition: Transition,
    pub active: bool,
    pub opacity: Option<Opacity>,
}

pub type Reveals = SmallVec<[Reveal; 8]>;

#[derive(Clone, Debug, Default)]
pub struct Revealer {
    elements: FnvHashMap<ElementId, Presentation>,
}

impl Revealer {
    /// Track `count` elements with ids `0..count`, all initially not intersecting.
    pub fn with_count(count: usize) -> Self {
        let elements = (0..count as u32)
            .map(|i| (ElementId(i), Presentation::default()))
            .collect();
        Self { elements }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn state(&self, id: ElementId) -> Option<Presentation> {
        self.elements.get(&id).copied()
    }

    /// Apply one record. Unknown ids (elements that were not part of the
    /// setup snapshot) are ignored.
    pub fn apply_record(&mut self, record: IntersectionRecord) -> Option<Reveal> {
        let Some(state) = self.elements.get_mut(&record.id) else {
            log::debug!("[reveal] ignoring unobserved element {:?}", record.id);
            return None;
        };
        if record.is_intersecting {
            state.active = true;
            Some(Reveal {
                id: record.id,
                transition: Transition::Enter,
                active: true,
                opacity: None,
            })
        } else {
            state.active = false;
            state.opacity = Opacity::Transparent;
            Some(Reveal {
                id: record.id,
                transition: Transition::Leave,
                active: false,
                opacity: Some(Opacity::Transparent),
            })
        }
    }

    pub fn apply_batch(&mut self, batch: &[IntersectionRecord]) -> Reveals {
        batch
            .iter()
            .filter_map(|r| self.apply_record(*r))
            .collect()
    }
}

/// FIFO of pending batches, drained through a [`Revealer`].
#[derive(Debug, Default)]
pub struct BatchQueue {
    pending: VecDeque<IntersectionBatch>,
}

impl BatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, batch: IntersectionBatch) {
        self.pending.push_back(batch);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply every queued batch in arrival order, handing each batch's reveals
    /// to `project` before the next batch is applied.
    pub fn drain_into(&mut self, revealer: &mut Revealer, mut project: impl FnMut(&[Reveal])) {
        while let Some(batch) = self.pending.pop_front() {
            let reveals = revealer.apply_batch(&batch);
            project(&reveals);
        }
    }
}
