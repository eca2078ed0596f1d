use std::path::PathBuf;

use raylib::prelude::*;

use crate::carousel::config::CarouselConfig;

/// Where slides come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideSource {
    Directory(PathBuf),
    Placeholders(usize),
}

pub trait Engine {
    fn initialize(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        config: CarouselConfig,
        source: SlideSource,
    ) -> anyhow::Result<Self>
    where
        Self: Sized;

    /// Polls input and timers for one frame.
    fn update(&mut self, rl: &RaylibHandle);

    fn render_frame(&self, d: &mut RaylibDrawHandle);
}
