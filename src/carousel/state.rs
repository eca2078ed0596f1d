use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{CarouselError, Result};

/// Identifies a slide independently of where it currently sits in the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Everything the carousel knows, with no timers and no display attached.
///
/// `current` is a position in `order`, not a `SlideId`.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    order: Vec<SlideId>,
    current: usize,
    playing: bool,
    hover_suspended: bool,
    help_visible: bool,
    progress: f32,
    progress_step: f32,
}

impl CarouselState {
    pub fn new(total: usize, progress_step: f32) -> Result<Self> {
        if total == 0 {
            return Err(CarouselError::NoSlides);
        }
        Ok(Self {
            order: (0..total).map(SlideId).collect(),
            current: 0,
            playing: true,
            hover_suspended: false,
            help_visible: false,
            progress: 0.0,
            progress_step,
        })
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn order(&self) -> &[SlideId] {
        &self.order
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_hover_suspended(&self) -> bool {
        self.hover_suspended
    }

    pub fn is_help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the autoplay timer should be running. The progress timer only
    /// follows the playing flag.
    pub fn autoplay_active(&self) -> bool {
        self.playing && !self.hover_suspended
    }

    pub fn advance(&mut self, direction: Direction) {
        let total = self.total();
        self.current = match direction {
            Direction::Next => (self.current + 1) % total,
            Direction::Previous => (self.current + total - 1) % total,
        };
    }

    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.total() {
            return Err(CarouselError::SlideOutOfRange {
                index,
                total: self.total(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Flips the playing flag and returns the new value. Resuming clears any
    /// hover suspension.
    pub fn toggle_playing(&mut self) -> bool {
        self.playing = !self.playing;
        if self.playing {
            self.hover_suspended = false;
        }
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
        if playing {
            self.hover_suspended = false;
        }
    }

    /// Uniform Fisher-Yates permutation of the order; back to position 0.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order.shuffle(rng);
        self.current = 0;
    }

    pub fn toggle_help(&mut self) -> bool {
        self.help_visible = !self.help_visible;
        self.help_visible
    }

    pub fn reset_progress(&mut self) {
        self.progress = 0.0;
    }

    pub fn tick_progress(&mut self) {
        if !self.playing {
            return;
        }
        self.progress += self.progress_step;
        if self.progress >= 100.0 {
            self.progress = 0.0;
        }
    }

    /// Returns true when the pointer actually suspended autoplay.
    pub fn suspend_for_hover(&mut self) -> bool {
        if self.playing && !self.hover_suspended {
            self.hover_suspended = true;
            return true;
        }
        false
    }

    /// Returns true when autoplay should resume.
    pub fn resume_from_hover(&mut self) -> bool {
        let was_suspended = self.hover_suspended;
        self.hover_suspended = false;
        was_suspended && self.playing
    }
}
