//! Instrumentation channel between the algorithms and whoever watches them.
//!
//! Every algorithm reports progress through a single capability,
//! [`EventSink::emit`]. Events are delivered synchronously, one per counted
//! step, and the algorithm does not continue until `emit` returns. A sink may
//! therefore block (to pace an animation, or while paused) for as long as it
//! likes. It cannot stop the sort early.
//!
//! The sinks in this module cover the common consumers:
//! - [`NoopSink`]: headless runs and benchmarks
//! - [`RecordingSink`]: keeps a copy of every event, mostly for tests and replay
//! - [`SamplingSink`]: forwards only swap/sorted events (comparison-mode throttle)
//! - [`PacedSink`]: sleeps between events and honours a [`PauseHandle`]

use crate::stats::SortStats;
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

/// Indices in a transient role for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Highlight {
    /// Two positions are being compared
    Comparing(usize, usize),
    /// Two positions were just swapped
    Swapping(usize, usize),
    /// These positions are in their final place
    Sorted(Vec<usize>),
    /// Position of the current pivot
    Pivot(usize),
    /// Position of the current minimum
    Min(usize),
}

impl Highlight {
    /// Short lowercase tag, matching the field names consumers key on.
    pub fn kind(&self) -> &'static str {
        match self {
            Highlight::Comparing(..) => "comparing",
            Highlight::Swapping(..) => "swapping",
            Highlight::Sorted(_) => "sorted",
            Highlight::Pivot(_) => "pivot",
            Highlight::Min(_) => "min",
        }
    }

    /// Whether a given index is covered by this highlight.
    pub fn contains(&self, index: usize) -> bool {
        match self {
            Highlight::Comparing(i, j) | Highlight::Swapping(i, j) => *i == index || *j == index,
            Highlight::Sorted(indices) => indices.contains(&index),
            Highlight::Pivot(i) | Highlight::Min(i) => *i == index,
        }
    }
}

/// One step of progress: snapshot, counters and optional highlight.
///
/// Absence of a highlight means any previous highlight is cleared.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    pub sequence: &'a [i64],
    pub stats: &'a SortStats,
    pub highlight: Option<&'a Highlight>,
}

/// Receiver of sort progress events.
pub trait EventSink {
    fn emit(&mut self, event: Event<'_>);
}

impl<F> EventSink for F
where
    F: FnMut(Event<'_>),
{
    fn emit(&mut self, event: Event<'_>) {
        self(event)
    }
}

#[inline]
pub(crate) fn notify<S: EventSink + ?Sized>(
    sink: &mut S,
    sequence: &[i64],
    stats: &SortStats,
    highlight: Option<&Highlight>,
) {
    sink.emit(Event {
        sequence,
        stats,
        highlight,
    });
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    #[inline]
    fn emit(&mut self, _event: Event<'_>) {}
}

/// Owned copy of an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub sequence: Vec<i64>,
    pub comparisons: u64,
    pub swaps: u64,
    pub highlight: Option<Highlight>,
}

/// Stores every event it receives, in order.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    events: Vec<RecordedEvent>,
    snapshots: bool,
}

impl RecordingSink {
    /// Record counters, highlights and full sequence snapshots.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            snapshots: true,
        }
    }

    /// Record counters and highlights only; snapshots are left empty.
    ///
    /// Useful on large inputs where copying the sequence per event is costly.
    pub fn without_snapshots() -> Self {
        Self {
            events: Vec::new(),
            snapshots: false,
        }
    }

    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over the highlights that were present, skipping plain events.
    pub fn highlights(&self) -> impl Iterator<Item = &Highlight> {
        self.events.iter().filter_map(|e| e.highlight.as_ref())
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: Event<'_>) {
        self.events.push(RecordedEvent {
            sequence: if self.snapshots {
                event.sequence.to_vec()
            } else {
                Vec::new()
            },
            comparisons: event.stats.comparisons,
            swaps: event.stats.swaps,
            highlight: event.highlight.cloned(),
        });
    }
}

/// Forwards only `Swapping` and `Sorted` events to an inner sink.
///
/// Everything else is counted and dropped.
#[derive(Debug)]
pub struct SamplingSink<S> {
    inner: S,
    forwarded: u64,
    skipped: u64,
}

impl<S: EventSink> SamplingSink<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            forwarded: 0,
            skipped: 0,
        }
    }

    pub fn forwarded(&self) -> u64 {
        self.forwarded
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: EventSink> EventSink for SamplingSink<S> {
    fn emit(&mut self, event: Event<'_>) {
        match event.highlight {
            Some(Highlight::Swapping(..)) | Some(Highlight::Sorted(_)) => {
                self.forwarded += 1;
                self.inner.emit(event);
            }
            _ => self.skipped += 1,
        }
    }
}

/// Lowest accepted animation speed
pub const MIN_SPEED: u32 = 1;
/// Highest accepted animation speed
pub const MAX_SPEED: u32 = 100;
/// Speed used for normal animation
pub const DEFAULT_SPEED: u32 = 50;
/// Slower speed used in step-by-step mode
pub const STEP_BY_STEP_SPEED: u32 = 20;

/// Per-event delay for a speed setting: `1 / (speed * 0.5 + 1)` seconds.
///
/// Speed is clamped to `MIN_SPEED..=MAX_SPEED`.
pub fn delay_for_speed(speed: u32) -> Duration {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED) as f64;
    Duration::from_secs_f64(1.0 / (speed * 0.5 + 1.0))
}

/// Shared pause switch for a [`PacedSink`].
///
/// Clone it and hand the clone to another thread; `pause` makes the next
/// `emit` block until `resume` is called.
#[derive(Debug, Clone, Default)]
pub struct PauseHandle {
    state: Arc<(Mutex<bool>, Condvar)>,
}

impl PauseHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pause(&self) {
        let (lock, _) = &*self.state;
        *lock.lock().unwrap_or_else(|e| e.into_inner()) = true;
    }

    pub fn resume(&self) {
        let (lock, cvar) = &*self.state;
        *lock.lock().unwrap_or_else(|e| e.into_inner()) = false;
        cvar.notify_all();
    }

    pub fn is_paused(&self) -> bool {
        let (lock, _) = &*self.state;
        *lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn wait_while_paused(&self) {
        let (lock, cvar) = &*self.state;
        let mut paused = lock.lock().unwrap_or_else(|e| e.into_inner());
        while *paused {
            paused = cvar.wait(paused).unwrap_or_else(|e| e.into_inner());
        }
    }
}

/// Forwards every event, then sleeps to pace the run.
///
/// Blocks before forwarding while its [`PauseHandle`] is paused.
#[derive(Debug)]
pub struct PacedSink<S> {
    inner: S,
    delay: Duration,
    pause: PauseHandle,
}

impl<S: EventSink> PacedSink<S> {
    /// Pace at the given speed setting (see [`delay_for_speed`]).
    pub fn new(inner: S, speed: u32) -> Self {
        Self::with_delay(inner, delay_for_speed(speed))
    }

    pub fn with_delay(inner: S, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            pause: PauseHandle::new(),
        }
    }

    /// Handle that pauses and resumes this sink from elsewhere.
    pub fn pause_handle(&self) -> PauseHandle {
        self.pause.clone()
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.delay = delay_for_speed(speed);
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: EventSink> EventSink for PacedSink<S> {
    fn emit(&mut self, event: Event<'_>) {
        self.pause.wait_while_paused();
        self.inner.emit(event);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}
