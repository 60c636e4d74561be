//! Event types and sinks for observing scene generation.
//!
//! [`SceneEvent`]s are sent while running
//! [`crate::packing::generator::SceneGenerator::generate_with_events`]. Sinks report through
//! [`EventSink::wants`] which kinds they care about, so unwanted events are never built.
use crate::geometry::Circle;
use crate::packing::generator::GenerationReport;
use crate::scene::SceneBounds;

/// Describes events emitted by the placement loop.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SceneEvent {
    /// Emitted once before the first slot is attempted.
    RunStarted {
        /// Resolved scene bounds.
        bounds: SceneBounds,
        /// Number of slots that will be attempted.
        num_circles: usize,
        /// Attempt budget per slot.
        max_attempts: usize,
    },

    /// Emitted when a slot accepted a circle.
    PlacementMade {
        /// Index of the slot.
        slot: usize,
        /// Attempts used by this slot, including the successful one.
        attempts: usize,
        /// The accepted circle.
        circle: Circle,
    },

    /// Emitted when a slot ran out of attempts.
    SlotAbandoned {
        /// Index of the slot.
        slot: usize,
        /// Attempts spent before giving up.
        attempts: usize,
    },

    /// Emitted after the last slot.
    RunFinished {
        /// Aggregated counts for the run.
        report: GenerationReport,
    },
}

/// Discriminant of a [`SceneEvent`], used by sinks to opt out of event families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneEventKind {
    RunStarted,
    PlacementMade,
    SlotAbandoned,
    RunFinished,
}

impl SceneEvent {
    pub fn kind(&self) -> SceneEventKind {
        match self {
            SceneEvent::RunStarted { .. } => SceneEventKind::RunStarted,
            SceneEvent::PlacementMade { .. } => SceneEventKind::PlacementMade,
            SceneEvent::SlotAbandoned { .. } => SceneEventKind::SlotAbandoned,
            SceneEvent::RunFinished { .. } => SceneEventKind::RunFinished,
        }
    }
}

/// Receives [`SceneEvent`]s from the placement loop.
pub trait EventSink {
    fn send(&mut self, event: SceneEvent);

    /// Whether events of `kind` should be built and sent at all.
    fn wants(&self, _kind: SceneEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SceneEvent) {}

    #[inline]
    fn wants(&self, _kind: SceneEventKind) -> bool {
        false
    }
}

/// Forwards events to a closure, optionally limited to a set of kinds.
pub struct FnSink<F>
where
    F: FnMut(SceneEvent),
{
    f: F,
    kinds: Option<Vec<SceneEventKind>>,
}

impl<F> FnSink<F>
where
    F: FnMut(SceneEvent),
{
    /// Forwards every event.
    pub fn new(f: F) -> Self {
        Self { f, kinds: None }
    }

    /// Forwards only events of the given kinds; others are never built.
    pub fn only(kinds: impl IntoIterator<Item = SceneEventKind>, f: F) -> Self {
        Self {
            f,
            kinds: Some(kinds.into_iter().collect()),
        }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SceneEvent),
{
    #[inline]
    fn send(&mut self, event: SceneEvent) {
        if self.wants(event.kind()) {
            (self.f)(event);
        }
    }

    fn wants(&self, kind: SceneEventKind) -> bool {
        self.kinds.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Collects every event in order.
#[derive(Debug, Default)]
pub struct VecSink {
    events: Vec<SceneEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Vec<SceneEvent> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SceneEvent) {
        self.events.push(event);
    }
}
