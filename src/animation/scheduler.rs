//! Playback scheduling.
//!
//! A [`Scheduler`] drives a looping sequence of timed [`Segment`]s forward in
//! wall-clock time. The host environment calls [`Scheduler::tick`] once per
//! display refresh; the scheduler advances normalized time through the active
//! segment and invokes its `update` callback with the current phase.
//!
//! The display-refresh signal itself is an external scheduling primitive, so
//! the clock is injected through [`FrameClock`]. Tests drive the scheduler
//! with a manual clock instead of a real refresh signal.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use log::debug;

use crate::errors::{FlyoverError, Result};
use crate::scene::FlatScene;

/// A monotonic frame-timestamp source, in milliseconds.
pub trait FrameClock {
    /// Current timestamp in milliseconds. Must be monotonically
    /// non-decreasing.
    fn now(&mut self) -> f64;
}

/// Wall-clock [`FrameClock`] anchored at its creation instant.
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl FrameClock for SystemClock {
    fn now(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// One timed unit of animation: a fixed duration and a per-frame callback
/// invoked with the segment's normalized phase in `[0, 1)`.
pub struct Segment {
    duration: f64,
    update: Box<dyn FnMut(f64)>,
}

impl Segment {
    /// Creates a segment lasting `duration` milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`FlyoverError::InvalidDuration`] unless `duration` is
    /// positive and finite. A zero duration would divide the phase by zero;
    /// a negative one would advance every tick.
    pub fn new(duration: f64, update: impl FnMut(f64) + 'static) -> Result<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(FlyoverError::InvalidDuration(duration));
        }
        Ok(Self {
            duration,
            update: Box::new(update),
        })
    }

    /// Creates a segment that sweeps the camera between two flat scenes,
    /// handing the interpolated scene to `apply` every frame.
    ///
    /// This is the usual wiring for a two-shot flyover: the map layer
    /// captures the scenes and supplies an `apply` that pushes the values to
    /// the renderer.
    pub fn between_scenes(
        duration: f64,
        start: FlatScene,
        end: FlatScene,
        mut apply: impl FnMut(FlatScene) + 'static,
    ) -> Result<Self> {
        Self::new(duration, move |phase| {
            apply(FlatScene::interpolate(&start, &end, phase));
        })
    }

    /// Segment length in milliseconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

/// Playback state of a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Stopped,
    Running,
    Paused,
}

/// Frame-synchronized playback driver for a looping segment list.
///
/// The scheduler owns its timing state exclusively; external code only
/// reaches it through [`play`](Self::play), [`pause`](Self::pause),
/// [`stop`](Self::stop) and [`tick`](Self::tick). It is reusable
/// indefinitely: the segment list loops and there is no terminal state.
pub struct Scheduler<C: FrameClock> {
    clock: C,
    segments: Vec<Segment>,
    state: PlayState,
    last_time: f64,
    time_playing: f64,
    segment_index: usize,
}

impl<C: FrameClock> Scheduler<C> {
    /// Creates a stopped scheduler over `segments`.
    ///
    /// # Errors
    ///
    /// Returns [`FlyoverError::EmptySegments`] when the list is empty.
    pub fn new(clock: C, segments: Vec<Segment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(FlyoverError::EmptySegments);
        }
        Ok(Self {
            clock,
            segments,
            state: PlayState::Stopped,
            last_time: 0.0,
            time_playing: 0.0,
            segment_index: 0,
        })
    }

    /// Starts or resumes playback. No-op when already running.
    ///
    /// Resuming from a pause re-anchors the clock reference to "now", so the
    /// paused wall time is not counted and no elapsed time is lost.
    pub fn play(&mut self) {
        if self.state == PlayState::Running {
            return;
        }
        debug!("scheduler: {:?} -> Running", self.state);
        self.last_time = self.clock.now();
        self.state = PlayState::Running;
    }

    /// Freezes playback without resetting elapsed time or segment index.
    pub fn pause(&mut self) {
        if self.state != PlayState::Running {
            return;
        }
        debug!(
            "scheduler: Running -> Paused at {:.1} ms into segment {}",
            self.time_playing, self.segment_index
        );
        self.state = PlayState::Paused;
    }

    /// Stops playback and rewinds to the start of the first segment.
    pub fn stop(&mut self) {
        debug!("scheduler: {:?} -> Stopped", self.state);
        self.state = PlayState::Stopped;
        self.time_playing = 0.0;
        self.segment_index = 0;
    }

    #[must_use]
    pub fn state(&self) -> PlayState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    /// Index of the segment currently being driven.
    #[must_use]
    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    /// Advances the animation by one frame. Called by the host once per
    /// display refresh; does nothing unless running, so a tick arriving after
    /// [`pause`](Self::pause) or [`stop`](Self::stop) never fires a stale
    /// `update`.
    ///
    /// When accumulated time overshoots the active segment, the scheduler
    /// advances to the next segment (wrapping at the end of the list) and
    /// carries the overshoot over instead of resetting it, which keeps
    /// motion smooth across segment boundaries and loop wraparound. The
    /// finished segment's `update` is not called past phase 1.0; the next
    /// tick drives the new segment. Only a single advance happens per tick:
    /// after an oversized delta (a dropped frame, say) the carried time may
    /// still exceed the new duration and resyncs over the following ticks.
    pub fn tick(&mut self) {
        if self.state != PlayState::Running {
            return;
        }

        let now = self.clock.now();
        let delta = now - self.last_time;
        self.last_time = now;
        self.time_playing += delta;

        let duration = self.segments[self.segment_index].duration;
        if self.time_playing > duration {
            // Next segment; carry over any time playing.
            self.segment_index = (self.segment_index + 1) % self.segments.len();
            self.time_playing -= duration;
        } else {
            let phase = self.time_playing / duration;
            (self.segments[self.segment_index].update)(phase);
        }
    }
}
