use raylib::prelude::*;

use crate::carousel::state::SlideId;

const PLACEHOLDER_COLORS: [Color; 8] = [
    Color::new(255, 70, 85, 255),
    Color::new(15, 25, 35, 255),
    Color::new(236, 232, 225, 255),
    Color::new(189, 57, 68, 255),
    Color::new(44, 62, 80, 255),
    Color::new(52, 152, 219, 255),
    Color::new(155, 89, 182, 255),
    Color::new(39, 174, 96, 255),
];

enum SlideContent {
    Image(Texture2D),
    Placeholder(Color),
}

/// One unit of carousel content, stored at the index of its `SlideId`.
/// Shuffling reorders ids, never slides.
pub struct Slide {
    pub title: String,
    content: SlideContent,
}

impl Slide {
    pub fn from_texture(title: String, image: Texture2D) -> Self {
        Self { title, content: SlideContent::Image(image) }
    }

    pub fn placeholder(id: SlideId) -> Self {
        Self {
            title: format!("Slide {}", id.0 + 1),
            content: SlideContent::Placeholder(placeholder_color(id)),
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, bounds: Rectangle, active: bool) {
        match &self.content {
            SlideContent::Image(image) => {
                d.draw_rectangle_rec(bounds, Color::BLACK);

                let tex_width = image.width() as f32;
                let tex_height = image.height() as f32;
                let scale = fit_scale(tex_width, tex_height, bounds.width, bounds.height);

                let scaled_width = tex_width * scale;
                let scaled_height = tex_height * scale;

                // Relative to the dest rectangle (ie. the center of the image)
                let origin = Vector2::new(scaled_width * 0.5, scaled_height * 0.5);
                let center = Vector2::new(bounds.x + bounds.width * 0.5, bounds.y + bounds.height * 0.5);

                d.draw_texture_pro(
                    image,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(center.x, center.y, scaled_width, scaled_height),
                    origin,
                    0.0,
                    Color::WHITE,
                );
            }
            SlideContent::Placeholder(color) => {
                d.draw_rectangle_rec(bounds, *color);
            }
        }

        let title_color = match &self.content {
            SlideContent::Placeholder(color) if is_light(*color) => Color::BLACK,
            _ => Color::WHITE,
        };
        d.draw_text(
            &self.title,
            (bounds.x + 24.0) as i32,
            (bounds.y + bounds.height - 56.0) as i32,
            32,
            title_color,
        );

        if active {
            d.draw_rectangle_lines_ex(bounds, 3.0, Color::new(255, 70, 85, 255));
        }
    }
}

/// Shrinks an image so it fits 90% of the bounds. Never upscales.
pub fn fit_scale(tex_width: f32, tex_height: f32, bounds_width: f32, bounds_height: f32) -> f32 {
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return 1.0;
    }
    let horizontal = bounds_width * 0.9 / tex_width;
    let vertical = bounds_height * 0.9 / tex_height;
    horizontal.min(vertical).min(1.0)
}

pub fn placeholder_color(id: SlideId) -> Color {
    PLACEHOLDER_COLORS[id.0 % PLACEHOLDER_COLORS.len()]
}

fn is_light(color: Color) -> bool {
    let luma = 0.299 * color.r as f32 + 0.587 * color.g as f32 + 0.114 * color.b as f32;
    luma > 160.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_are_not_upscaled() {
        assert_eq!(fit_scale(100.0, 50.0, 1200.0, 500.0), 1.0);
    }

    #[test]
    fn wide_images_fit_the_width() {
        let scale = fit_scale(4000.0, 1000.0, 1000.0, 1000.0);
        assert!((scale - 0.225).abs() < 1e-6);
    }

    #[test]
    fn tall_images_fit_the_height() {
        let scale = fit_scale(1000.0, 4000.0, 1000.0, 1000.0);
        assert!((scale - 0.225).abs() < 1e-6);
    }

    #[test]
    fn placeholder_colors_cycle() {
        let first = placeholder_color(SlideId(0));
        let ninth = placeholder_color(SlideId(8));
        assert_eq!((first.r, first.g, first.b), (ninth.r, ninth.g, ninth.b));
        assert!(is_light(placeholder_color(SlideId(2))));
        assert!(!is_light(placeholder_color(SlideId(1))));
    }
}
