//! Page-index sequencer: walks a lagging "current page" toward the page the
//! reader asked for, one page per step.
//!
//! A jump from the cover to page 9 turns every page in between instead of
//! teleporting. Steps are paced by distance: far from the target they come
//! quickly, the last couple of pages land slowly.
//!
//! There is no timer inside. The host calls [`PageIndexSequencer::tick`]
//! every frame with the current time and the sequencer decides whether a
//! step is due. Cancelling is a state change, so nothing can fire after
//! [`PageIndexSequencer::cancel`].

use web_time::Instant;

use crate::options::SequencerOptions;

/// Whether a step is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// `current == target`, or stepping was cancelled.
    Idle,
    /// Next step fires at `due`.
    Stepping {
        /// When the next step is due.
        due: Instant,
    },
}

/// Drives `current` toward `target` by exactly one page per step.
#[derive(Debug, Clone)]
pub struct PageIndexSequencer {
    current: usize,
    target: usize,
    /// Highest valid page index (`P`, the back cover shut).
    max_page: usize,
    state: SequencerState,
    options: SequencerOptions,
}

impl PageIndexSequencer {
    /// Create a sequencer at rest on page 0 for a book of `page_count`
    /// pages. Valid targets are `0..=page_count`.
    pub fn new(page_count: usize, options: SequencerOptions) -> Self {
        Self {
            current: 0,
            target: 0,
            max_page: page_count,
            state: SequencerState::Idle,
            options,
        }
    }

    /// The lagging page index pages animate against.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The page the reader asked for.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Highest valid target.
    pub fn max_page(&self) -> usize {
        self.max_page
    }

    /// Current stepping state.
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Whether no step is pending.
    pub fn is_idle(&self) -> bool {
        self.state == SequencerState::Idle
    }

    /// When the pending step is due, if any.
    pub fn next_step_at(&self) -> Option<Instant> {
        match self.state {
            SequencerState::Idle => None,
            SequencerState::Stepping { due } => Some(due),
        }
    }

    /// Pacing options.
    pub fn options(&self) -> &SequencerOptions {
        &self.options
    }

    /// Replace pacing options. A pending step keeps its due time.
    pub fn set_options(&mut self, options: SequencerOptions) {
        self.options = options;
    }

    /// Whether page `index` lies before the current page.
    pub fn is_opened(&self, index: usize) -> bool {
        self.current > index
    }

    /// Whether the book is shut on either cover.
    pub fn is_book_closed(&self) -> bool {
        self.current == 0 || self.current == self.max_page
    }

    /// Request a new target page. Out-of-range requests clamp to
    /// `0..=max_page`.
    ///
    /// Asking again for the target of a walk in flight changes nothing: the
    /// pending step keeps its due time. Otherwise any pending step is
    /// dropped and the walk restarts from the live `current`, taking its
    /// first step immediately. Returns the new `current` when that first
    /// step happened.
    pub fn set_target(&mut self, target: i64, now: Instant) -> Option<usize> {
        let clamped = target.clamp(0, self.max_page as i64) as usize;
        if clamped == self.target && !self.is_idle() {
            return None;
        }
        if clamped != self.target {
            log::debug!(
                "page target {} -> {clamped} (current {})",
                self.target,
                self.current
            );
        }
        self.target = clamped;
        self.state = SequencerState::Idle;
        self.step(now)
    }

    /// Advance if a step is due. Takes at most one step per call.
    ///
    /// Returns the new `current` when it changed.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        match self.state {
            SequencerState::Stepping { due } if now >= due => self.step(now),
            _ => None,
        }
    }

    /// Drop any pending step. `current` stays where it is.
    pub fn cancel(&mut self) {
        self.state = SequencerState::Idle;
    }

    /// Jump straight to `page` with no stepping (initial placement).
    pub fn snap_to(&mut self, page: i64) {
        let clamped = page.clamp(0, self.max_page as i64) as usize;
        self.current = clamped;
        self.target = clamped;
        self.state = SequencerState::Idle;
    }

    fn step(&mut self, now: Instant) -> Option<usize> {
        if self.current == self.target {
            self.state = SequencerState::Idle;
            return None;
        }

        let delay = self.options.delay_for(self.current.abs_diff(self.target));
        if self.target > self.current {
            self.current += 1;
        } else {
            self.current -= 1;
        }

        self.state = if self.current == self.target {
            SequencerState::Idle
        } else {
            SequencerState::Stepping { due: now + delay }
        };
        log::trace!("page step -> {} (target {})", self.current, self.target);
        Some(self.current)
    }
}
