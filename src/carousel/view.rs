//! What the screen should show for a given [`CarouselState`].
//!
//! The projection is pure: the raylib layer only reads a [`CarouselView`] and
//! never looks at the state directly.

use crate::carousel::state::{CarouselState, SlideId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackLabel {
    /// Shown while playing.
    Pause,
    /// Shown while paused.
    Play,
}

impl PlaybackLabel {
    pub fn text(self) -> &'static str {
        match self {
            PlaybackLabel::Pause => "Pause",
            PlaybackLabel::Play => "Play",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideView {
    pub id: SlideId,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    /// Horizontal offset of the whole track, in percent of the track width.
    pub track_offset_percent: f32,
    /// Slides in display order.
    pub slides: Vec<SlideView>,
    /// One flag per dot, true for the active one.
    pub dots: Vec<bool>,
    pub progress_percent: f32,
    pub playback: PlaybackLabel,
    pub play_button_active: bool,
    pub help_visible: bool,
}

impl CarouselView {
    pub fn project(state: &CarouselState) -> Self {
        let current = state.current_index();
        let total = state.total();

        let slides = state
            .order()
            .iter()
            .enumerate()
            .map(|(position, id)| SlideView {
                id: *id,
                active: position == current,
            })
            .collect();

        let playback = if state.is_playing() {
            PlaybackLabel::Pause
        } else {
            PlaybackLabel::Play
        };

        Self {
            track_offset_percent: -(current as f32) * (100.0 / total as f32),
            slides,
            dots: (0..total).map(|position| position == current).collect(),
            progress_percent: state.progress(),
            playback,
            play_button_active: state.is_playing(),
            help_visible: state.is_help_visible(),
        }
    }

    pub fn active_position(&self) -> Option<usize> {
        self.slides.iter().position(|slide| slide.active)
    }

    pub fn active_slide_count(&self) -> usize {
        self.slides.iter().filter(|slide| slide.active).count()
    }

    pub fn active_dot_count(&self) -> usize {
        self.dots.iter().filter(|dot| **dot).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::state::Direction;

    #[test]
    fn first_render_marks_first_slide_and_dot() {
        let state = CarouselState::new(8, 2.5).unwrap();
        let view = CarouselView::project(&state);

        assert_eq!(view.slides.len(), 8);
        assert_eq!(view.dots.len(), 8);
        assert_eq!(view.active_position(), Some(0));
        assert!(view.dots[0]);
        assert_eq!(view.track_offset_percent, 0.0);
        assert_eq!(view.playback, PlaybackLabel::Pause);
        assert!(view.play_button_active);
    }

    #[test]
    fn exactly_one_active_slide_and_dot_everywhere() {
        let mut state = CarouselState::new(8, 2.5).unwrap();
        for _ in 0..16 {
            state.advance(Direction::Next);
            let view = CarouselView::project(&state);
            assert_eq!(view.active_slide_count(), 1);
            assert_eq!(view.active_dot_count(), 1);
            assert_eq!(view.active_position(), Some(state.current_index()));
        }
    }

    #[test]
    fn track_offset_follows_index() {
        let mut state = CarouselState::new(8, 2.5).unwrap();
        state.go_to(4).unwrap();
        let view = CarouselView::project(&state);
        assert_eq!(view.track_offset_percent, -50.0);
    }

    #[test]
    fn paused_state_shows_play() {
        let mut state = CarouselState::new(3, 2.5).unwrap();
        state.toggle_playing();
        let view = CarouselView::project(&state);
        assert_eq!(view.playback, PlaybackLabel::Play);
        assert_eq!(view.playback.text(), "Play");
        assert!(!view.play_button_active);
    }
}
