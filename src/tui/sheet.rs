//! Slide animation state machine for the bottom add sheet.
//!
//! The sheet slides up from below the screen over a fixed duration and
//! reverses on close. The visibility flag only flips to hidden once the
//! close animation has run to completion, so the sheet is never removed
//! while still visually sliding. All methods take an explicit `now` so the
//! timeline is driven by the event loop and testable without sleeping.

use std::time::{Duration, Instant};

/// Duration of the open and close slides.
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetPhase {
    Hidden,
    Opening,
    Shown,
    Closing,
}

#[derive(Debug, Clone)]
pub struct AddSheet {
    phase: SheetPhase,
    phase_started: Instant,
}

impl AddSheet {
    pub fn new() -> Self {
        AddSheet {
            phase: SheetPhase::Hidden,
            phase_started: Instant::now(),
        }
    }

    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    /// The sheet participates in rendering and input whenever it is not
    /// fully hidden, including while a close slide is still in flight.
    pub fn is_visible(&self) -> bool {
        self.phase != SheetPhase::Hidden
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, SheetPhase::Opening | SheetPhase::Closing)
    }

    /// Begin the open slide. The offset always restarts from fully
    /// off-screen, even when a close animation is in flight, so a re-entrant
    /// open never starts mid-track.
    pub fn open(&mut self, now: Instant) {
        self.phase = SheetPhase::Opening;
        self.phase_started = now;
    }

    /// Begin the close slide. The phase only becomes hidden once the slide
    /// completes (see [`AddSheet::tick`]). No-op when already hidden.
    pub fn request_close(&mut self, now: Instant) {
        if self.phase != SheetPhase::Hidden {
            self.phase = SheetPhase::Closing;
            self.phase_started = now;
        }
    }

    /// Advance the timeline: settle finished slides into their end states.
    pub fn tick(&mut self, now: Instant) {
        let elapsed = now.duration_since(self.phase_started);
        match self.phase {
            SheetPhase::Opening if elapsed >= SLIDE_DURATION => {
                self.phase = SheetPhase::Shown;
            }
            SheetPhase::Closing if elapsed >= SLIDE_DURATION => {
                self.phase = SheetPhase::Hidden;
            }
            _ => {}
        }
    }

    /// Fraction of the sheet still off-screen: 1.0 fully hidden, 0.0 fully
    /// shown. Linear in elapsed time during a slide.
    pub fn offscreen_fraction(&self, now: Instant) -> f64 {
        let t = (now.duration_since(self.phase_started).as_secs_f64()
            / SLIDE_DURATION.as_secs_f64())
        .clamp(0.0, 1.0);
        match self.phase {
            SheetPhase::Hidden => 1.0,
            SheetPhase::Shown => 0.0,
            SheetPhase::Opening => 1.0 - t,
            SheetPhase::Closing => t,
        }
    }

    /// Vertical offset in rows for a sheet of the given height.
    pub fn offset_rows(&self, sheet_height: u16, now: Instant) -> u16 {
        (self.offscreen_fraction(now) * sheet_height as f64).round() as u16
    }
}

impl Default for AddSheet {
    fn default() -> Self {
        AddSheet::new()
    }
}
