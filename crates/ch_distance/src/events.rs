//! Event types and sinks for observing distance runs.
//!
//! This module defines [`DistanceEvent`] and a set of sinks to emit, collect, or
//! forward events while executing [`crate::pipeline::compute_distance_with_events`]
//! or [`crate::solver::DistanceSolver::solve_with_events`].
use crate::pipeline::{DistanceConfig, RunSummary};

/// Describes events emitted by distance runs.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum DistanceEvent {
    /// Emitted when a run starts.
    RunStarted {
        /// The configuration used.
        config: DistanceConfig,
        /// Source grid shape `(azimuth, colatitude)`.
        source_shape: (usize, usize),
        /// Target mesh shape `(azimuth, colatitude)`.
        target_shape: (usize, usize),
    },

    /// Emitted once boundary points have been extracted and partitioned.
    BoundaryExtracted {
        /// Total boundary points.
        points: usize,
        /// Boundary points whose value is closed field.
        closed_field: usize,
        /// Boundary points whose value is coronal hole.
        coronal_hole: usize,
        /// Fraction of source cells on a boundary.
        fraction: f64,
    },

    /// Emitted after each target mesh row has been evaluated.
    RowCompleted {
        /// Zero-based row (azimuth) index.
        row: usize,
        /// Total number of rows.
        rows: usize,
    },

    /// Emitted when the run finishes successfully.
    RunFinished {
        /// Summary of the run.
        summary: RunSummary,
    },

    /// Non-fatal warning generated during a run.
    Warning {
        /// Context string (e.g. stage name).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of [`DistanceEvent`], used to filter what a sink receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DistanceEventKind {
    RunStarted,
    BoundaryExtracted,
    RowCompleted,
    RunFinished,
    Warning,
}

impl DistanceEvent {
    pub fn kind(&self) -> DistanceEventKind {
        match self {
            DistanceEvent::RunStarted { .. } => DistanceEventKind::RunStarted,
            DistanceEvent::BoundaryExtracted { .. } => DistanceEventKind::BoundaryExtracted,
            DistanceEvent::RowCompleted { .. } => DistanceEventKind::RowCompleted,
            DistanceEvent::RunFinished { .. } => DistanceEventKind::RunFinished,
            DistanceEvent::Warning { .. } => DistanceEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`DistanceEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: DistanceEvent);

    /// Whether events of `kind` should be constructed and sent at all.
    #[inline]
    fn wants(&self, _kind: DistanceEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: DistanceEvent) {}

    #[inline]
    fn wants(&self, _kind: DistanceEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(DistanceEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(DistanceEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(DistanceEvent),
{
    #[inline]
    fn send(&mut self, event: DistanceEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally skipping per-row progress.
#[derive(Default)]
pub struct VecSink {
    events: Vec<DistanceEvent>,
    skip_rows: bool,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that ignores [`DistanceEvent::RowCompleted`].
    pub fn without_rows() -> Self {
        Self {
            events: Vec::new(),
            skip_rows: true,
        }
    }

    pub fn into_inner(self) -> Vec<DistanceEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[DistanceEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
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
    fn send(&mut self, event: DistanceEvent) {
        self.events.push(event);
    }

    fn wants(&self, kind: DistanceEventKind) -> bool {
        !(self.skip_rows && kind == DistanceEventKind::RowCompleted)
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: DistanceEvent) {
        let kind = event.kind();
        for sink in self.sinks.iter_mut().filter(|s| s.wants(kind)) {
            sink.send(event.clone());
        }
    }

    fn wants(&self, kind: DistanceEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
