use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;
use tracing::{info, warn};

use crate::carousel::config::CarouselConfig;
use crate::carousel::controller::Carousel;
use crate::carousel::layout::{DOT_RADIUS, Hit, Layout};
use crate::carousel::state::SlideId;
use crate::engine::{Engine, SlideSource};
use crate::error::CarouselError;
use crate::input::{HoverTracker, Key, PointerRelease, PointerTracker};
use crate::scheduler::SystemClock;
use crate::slide::Slide;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

const BACKGROUND: Color = Color::new(15, 25, 35, 255);
const ACCENT: Color = Color::new(255, 70, 85, 255);
const MUTED: Color = Color::new(60, 70, 80, 255);

const KEY_BINDINGS: [(KeyboardKey, Key); 14] = [
    (KeyboardKey::KEY_LEFT, Key::Left),
    (KeyboardKey::KEY_RIGHT, Key::Right),
    (KeyboardKey::KEY_SPACE, Key::Space),
    (KeyboardKey::KEY_S, Key::Char('s')),
    (KeyboardKey::KEY_H, Key::Char('h')),
    (KeyboardKey::KEY_ONE, Key::Char('1')),
    (KeyboardKey::KEY_TWO, Key::Char('2')),
    (KeyboardKey::KEY_THREE, Key::Char('3')),
    (KeyboardKey::KEY_FOUR, Key::Char('4')),
    (KeyboardKey::KEY_FIVE, Key::Char('5')),
    (KeyboardKey::KEY_SIX, Key::Char('6')),
    (KeyboardKey::KEY_SEVEN, Key::Char('7')),
    (KeyboardKey::KEY_EIGHT, Key::Char('8')),
    (KeyboardKey::KEY_NINE, Key::Char('9')),
];

const HELP_LINES: [&str; 6] = [
    "Left / Right   previous / next slide",
    "Space          play / pause",
    "S              shuffle slides",
    "H              show / hide this help",
    "1 - 9          jump to slide",
    "Swipe or drag the slides to navigate",
];

pub struct CarouselEngine {
    slides: Vec<Slide>,
    carousel: Carousel<SystemClock, StdRng>,
    layout: Layout,
    pointer: PointerTracker<Hit>,
    hover: HoverTracker,
}

fn load_slides(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    source: SlideSource,
) -> anyhow::Result<Vec<Slide>> {
    match source {
        SlideSource::Placeholders(count) => Ok((0..count).map(|i| Slide::placeholder(SlideId(i))).collect()),
        SlideSource::Directory(directory) => {
            let paths = load_sorted_image_paths(&directory)?;
            let mut slides = Vec::new();
            for path in paths {
                match load_texture_with_exif_rotation(rl, thread, &path) {
                    Ok(texture) => {
                        let title = path
                            .file_stem()
                            .map(|stem| stem.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        slides.push(Slide::from_texture(title, texture));
                    }
                    Err(e) => warn!("skipping slide: {}", e),
                }
            }
            Ok(slides)
        }
    }
}

impl Engine for CarouselEngine {
    fn initialize(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        config: CarouselConfig,
        source: SlideSource,
    ) -> anyhow::Result<Self> {
        let slides = load_slides(rl, thread, source)?;
        if slides.is_empty() {
            return Err(CarouselError::NoSlides.into());
        }

        let config = config
            .with_slide_count(slides.len())
            .validate()
            .context("invalid carousel configuration")?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut carousel = Carousel::new(&config, SystemClock::new(), rng)?;
        carousel.initialize();
        info!(slides = slides.len(), "slides loaded");

        let layout = Layout::new(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            slides.len(),
        );

        Ok(Self {
            slides,
            carousel,
            layout,
            pointer: PointerTracker::new(config.swipe_threshold),
            hover: HoverTracker::default(),
        })
    }

    fn update(&mut self, rl: &RaylibHandle) {
        self.layout = Layout::new(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            self.slides.len(),
        );

        for (raylib_key, key) in KEY_BINDINGS {
            if rl.is_key_pressed(raylib_key) {
                self.carousel.handle_key(key);
            }
        }

        let pointer = rl.get_mouse_position();
        if let Some(change) = self.hover.update(self.layout.in_track(pointer)) {
            self.carousel.hover(change);
        }

        // Raylib reports touches as the left mouse button
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            self.pointer
                .press(pointer.x, self.layout.in_track(pointer), self.layout.hit_test(pointer));
        }

        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            match self.pointer.release(pointer.x, self.layout.hit_test(pointer)) {
                Some(PointerRelease::Swipe(direction)) => self.carousel.advance(direction),
                Some(PointerRelease::Click(hit)) => {
                    if let Err(e) = self.carousel.apply(hit.command()) {
                        warn!("ignored click on {:?}: {}", hit, e);
                    }
                }
                None => {}
            }
        }

        self.carousel.tick();
    }

    fn render_frame(&self, d: &mut RaylibDrawHandle) {
        let view = self.carousel.view();
        let layout = &self.layout;
        let total = view.slides.len();

        d.clear_background(BACKGROUND);

        for (position, slide_view) in view.slides.iter().enumerate() {
            let rect = layout.slide_rect(position, view.track_offset_percent, total);
            if layout.is_on_screen(&rect) {
                self.slides[slide_view.id.0].draw(d, rect, slide_view.active);
            }
        }

        draw_button(d, layout.prev_button, "<", false);
        draw_button(d, layout.next_button, ">", false);

        for (x, active) in layout.dot_xs.iter().zip(&view.dots) {
            let color = if *active { ACCENT } else { MUTED };
            d.draw_circle(*x as i32, layout.dots_y as i32, DOT_RADIUS, color);
        }

        let bar = layout.progress_bar;
        d.draw_rectangle_rec(bar, MUTED);
        d.draw_rectangle_rec(
            Rectangle::new(bar.x, bar.y, bar.width * view.progress_percent / 100.0, bar.height),
            ACCENT,
        );

        draw_button(d, layout.play_button, view.playback.text(), view.play_button_active);
        draw_button(d, layout.shuffle_button, "Shuffle", false);
        draw_button(d, layout.help_button, "Help", view.help_visible);

        if view.help_visible {
            let panel = layout.help_panel;
            d.draw_rectangle_rec(panel, Color::new(0, 0, 0, 210));
            d.draw_rectangle_lines_ex(panel, 2.0, ACCENT);
            d.draw_text(
                "Keyboard shortcuts",
                (panel.x + 24.0) as i32,
                (panel.y + 20.0) as i32,
                28,
                ACCENT,
            );
            for (i, line) in HELP_LINES.iter().enumerate() {
                d.draw_text(
                    line,
                    (panel.x + 24.0) as i32,
                    (panel.y + 68.0 + i as f32 * 30.0) as i32,
                    20,
                    Color::WHITE,
                );
            }
        }
    }
}

fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, label: &str, active: bool) {
    let fill = if active { ACCENT } else { Color::new(0, 0, 0, 150) };
    d.draw_rectangle_rec(rect, fill);
    d.draw_rectangle_lines_ex(rect, 1.0, Color::WHITE);
    d.draw_text(
        label,
        (rect.x + 16.0) as i32,
        (rect.y + rect.height * 0.5 - 10.0) as i32,
        20,
        Color::WHITE,
    );
}
