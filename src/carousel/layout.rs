use raylib::prelude::*;

use crate::carousel::state::Direction;
use crate::input::Command;

const MARGIN: f32 = 40.0;
const NAV_BUTTON_WIDTH: f32 = 50.0;
const NAV_BUTTON_HEIGHT: f32 = 70.0;
pub const DOT_RADIUS: f32 = 8.0;
const DOT_SPACING: f32 = 28.0;
const PROGRESS_HEIGHT: f32 = 6.0;
const CONTROL_WIDTH: f32 = 140.0;
const CONTROL_HEIGHT: f32 = 40.0;
const CONTROL_GAP: f32 = 16.0;
const FOOTER_HEIGHT: f32 = 150.0;

/// Clickable regions of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Previous,
    Next,
    PlayPause,
    Shuffle,
    Help,
    Dot(usize),
}

impl Hit {
    pub fn command(self) -> Command {
        match self {
            Hit::Previous => Command::Advance(Direction::Previous),
            Hit::Next => Command::Advance(Direction::Next),
            Hit::PlayPause => Command::TogglePlayback,
            Hit::Shuffle => Command::Shuffle,
            Hit::Help => Command::ToggleHelp,
            Hit::Dot(position) => Command::GoTo(position),
        }
    }
}

/// Screen geometry for one window size and slide count.
#[derive(Debug, Clone)]
pub struct Layout {
    pub viewport: Rectangle,
    pub prev_button: Rectangle,
    pub next_button: Rectangle,
    pub dots_y: f32,
    pub dot_xs: Vec<f32>,
    pub progress_bar: Rectangle,
    pub play_button: Rectangle,
    pub shuffle_button: Rectangle,
    pub help_button: Rectangle,
    pub help_panel: Rectangle,
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

impl Layout {
    pub fn new(screen_width: f32, screen_height: f32, total: usize) -> Self {
        let viewport = Rectangle::new(
            MARGIN,
            MARGIN,
            (screen_width - 2.0 * MARGIN).max(1.0),
            (screen_height - MARGIN - FOOTER_HEIGHT).max(1.0),
        );
        let nav_y = viewport.y + (viewport.height - NAV_BUTTON_HEIGHT) * 0.5;
        let prev_button = Rectangle::new(viewport.x + 10.0, nav_y, NAV_BUTTON_WIDTH, NAV_BUTTON_HEIGHT);
        let next_button = Rectangle::new(
            viewport.x + viewport.width - 10.0 - NAV_BUTTON_WIDTH,
            nav_y,
            NAV_BUTTON_WIDTH,
            NAV_BUTTON_HEIGHT,
        );

        let dots_y = viewport.y + viewport.height + 24.0;
        let dots_width = DOT_SPACING * total.saturating_sub(1) as f32;
        let first_dot_x = screen_width * 0.5 - dots_width * 0.5;
        let dot_xs = (0..total).map(|i| first_dot_x + i as f32 * DOT_SPACING).collect();

        let progress_bar = Rectangle::new(viewport.x, dots_y + 24.0, viewport.width, PROGRESS_HEIGHT);

        let controls_y = progress_bar.y + PROGRESS_HEIGHT + 24.0;
        let controls_width = 3.0 * CONTROL_WIDTH + 2.0 * CONTROL_GAP;
        let controls_x = screen_width * 0.5 - controls_width * 0.5;
        let control = |slot: f32| {
            Rectangle::new(
                controls_x + slot * (CONTROL_WIDTH + CONTROL_GAP),
                controls_y,
                CONTROL_WIDTH,
                CONTROL_HEIGHT,
            )
        };

        let help_panel = Rectangle::new(
            viewport.x + viewport.width * 0.2,
            viewport.y + viewport.height * 0.15,
            viewport.width * 0.6,
            viewport.height * 0.7,
        );

        Self {
            viewport,
            prev_button,
            next_button,
            dots_y,
            dot_xs,
            progress_bar,
            play_button: control(0.0),
            shuffle_button: control(1.0),
            help_button: control(2.0),
            help_panel,
        }
    }

    pub fn in_track(&self, point: Vector2) -> bool {
        contains(&self.viewport, point)
    }

    /// Buttons take precedence over the track they sit on.
    pub fn hit_test(&self, point: Vector2) -> Option<Hit> {
        let buttons = [
            (self.prev_button, Hit::Previous),
            (self.next_button, Hit::Next),
            (self.play_button, Hit::PlayPause),
            (self.shuffle_button, Hit::Shuffle),
            (self.help_button, Hit::Help),
        ];
        if let Some((_, hit)) = buttons.iter().find(|(rect, _)| contains(rect, point)) {
            return Some(*hit);
        }

        let reach = DOT_RADIUS + 4.0;
        self.dot_xs
            .iter()
            .position(|x| (point.x - x).abs() <= reach && (point.y - self.dots_y).abs() <= reach)
            .map(Hit::Dot)
    }

    /// Where the slide at `position` sits once the track is offset.
    pub fn slide_rect(&self, position: usize, track_offset_percent: f32, total: usize) -> Rectangle {
        let track_width = self.viewport.width * total as f32;
        let track_x = self.viewport.x + track_width * track_offset_percent / 100.0;
        Rectangle::new(
            track_x + position as f32 * self.viewport.width,
            self.viewport.y,
            self.viewport.width,
            self.viewport.height,
        )
    }

    pub fn is_on_screen(&self, rect: &Rectangle) -> bool {
        rect.x < self.viewport.x + self.viewport.width && rect.x + rect.width > self.viewport.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(1280.0, 720.0, 8)
    }

    fn center(rect: &Rectangle) -> Vector2 {
        Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
    }

    #[test]
    fn one_dot_per_slide() {
        assert_eq!(layout().dot_xs.len(), 8);
    }

    #[test]
    fn buttons_map_to_their_commands() {
        let layout = layout();
        assert_eq!(layout.hit_test(center(&layout.prev_button)), Some(Hit::Previous));
        assert_eq!(layout.hit_test(center(&layout.next_button)), Some(Hit::Next));
        assert_eq!(layout.hit_test(center(&layout.play_button)), Some(Hit::PlayPause));
        assert_eq!(layout.hit_test(center(&layout.shuffle_button)), Some(Hit::Shuffle));
        assert_eq!(layout.hit_test(center(&layout.help_button)), Some(Hit::Help));
        assert_eq!(Hit::Next.command(), Command::Advance(Direction::Next));
    }

    #[test]
    fn dot_click_goes_to_that_slide() {
        let layout = layout();
        let point = Vector2::new(layout.dot_xs[3], layout.dots_y);
        assert_eq!(layout.hit_test(point), Some(Hit::Dot(3)));
        assert_eq!(Hit::Dot(3).command(), Command::GoTo(3));
    }

    #[test]
    fn middle_of_the_track_is_not_a_button() {
        let layout = layout();
        let point = center(&layout.viewport);
        assert!(layout.in_track(point));
        assert_eq!(layout.hit_test(point), None);
    }

    #[test]
    fn only_the_active_slide_is_on_screen() {
        let layout = layout();
        let offset = -4.0 * (100.0 / 8.0);
        let visible: Vec<usize> = (0..8)
            .filter(|i| layout.is_on_screen(&layout.slide_rect(*i, offset, 8)))
            .collect();
        assert_eq!(visible, vec![4]);
        assert_eq!(layout.slide_rect(4, offset, 8).x, layout.viewport.x);
    }
}
