//! A slide carousel: autoplay, manual navigation, shuffle, keyboard
//! shortcuts, swipe and a progress bar, drawn with raylib.
//!
//! The carousel logic ([`carousel::Carousel`]) is independent of the window:
//! it runs on an injectable [`scheduler::Clock`] and exposes a pure
//! [`carousel::CarouselView`] that the raylib engine draws.

pub mod carousel;
pub mod cli;
pub mod constants;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod scheduler;
pub mod slide;
pub mod texture_loader;

pub use error::{CarouselError, Result};
