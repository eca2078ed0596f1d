use crate::carousel::state::Direction;
use crate::constants::MAX_DIGIT_SHORTCUT;

/// Keys the carousel reacts to, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Space,
    Char(char),
}

/// A user intent, already decoded from whatever input produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance(Direction),
    GoTo(usize),
    TogglePlayback,
    Shuffle,
    ToggleHelp,
}

/// Maps a key press to a command. Digits only count up to `total` slides.
pub fn dispatch_key(key: Key, total: usize) -> Option<Command> {
    match key {
        Key::Left => Some(Command::Advance(Direction::Previous)),
        Key::Right => Some(Command::Advance(Direction::Next)),
        Key::Space => Some(Command::TogglePlayback),
        Key::Char(c) => match c.to_ascii_lowercase() {
            's' => Some(Command::Shuffle),
            'h' => Some(Command::ToggleHelp),
            ' ' => Some(Command::TogglePlayback),
            c => {
                let digit = c.to_digit(10)? as usize;
                (1..=total.min(MAX_DIGIT_SHORTCUT))
                    .contains(&digit)
                    .then(|| Command::GoTo(digit - 1))
            }
        },
    }
}

/// Turns a touch-start/touch-end pair into a swipe.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self { threshold, start_x: None }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Swiping left (finger moves towards smaller x) means next slide.
    pub fn touch_end(&mut self, x: f32) -> Option<Direction> {
        let start = self.start_x.take()?;
        let delta = start - x;
        if delta.abs() <= self.threshold {
            return None;
        }
        if delta > 0.0 {
            Some(Direction::Next)
        } else {
            Some(Direction::Previous)
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

/// What a finished press/release pair turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRelease<T> {
    Swipe(Direction),
    Click(T),
}

/// Decides whether a press/release is a swipe on the track or a click on a
/// target. `T` is whatever the hit test returns.
#[derive(Debug, Clone)]
pub struct PointerTracker<T> {
    swipe: SwipeTracker,
    pressed_on: Option<T>,
}

impl<T: Copy + PartialEq> PointerTracker<T> {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            swipe: SwipeTracker::new(swipe_threshold),
            pressed_on: None,
        }
    }

    /// Only a press on bare track can start a swipe; buttons never do.
    pub fn press(&mut self, x: f32, in_track: bool, target: Option<T>) {
        self.pressed_on = target;
        if in_track && target.is_none() {
            self.swipe.touch_start(x);
        } else {
            self.swipe.cancel();
        }
    }

    /// A swipe wins over a click; a click needs press and release on the same target.
    pub fn release(&mut self, x: f32, target: Option<T>) -> Option<PointerRelease<T>> {
        let pressed_on = self.pressed_on.take();
        if let Some(direction) = self.swipe.touch_end(x) {
            return Some(PointerRelease::Swipe(direction));
        }
        match (pressed_on, target) {
            (Some(pressed), Some(released)) if pressed == released => Some(PointerRelease::Click(pressed)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange {
    Entered,
    Left,
}

/// Edge detector for the pointer being over the slide track.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    inside: bool,
}

impl HoverTracker {
    pub fn update(&mut self, inside: bool) -> Option<HoverChange> {
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        Some(if inside { HoverChange::Entered } else { HoverChange::Left })
    }
}
