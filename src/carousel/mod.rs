pub mod config;
pub mod controller;
pub mod engine;
pub mod layout;
pub mod state;
pub mod view;

pub use config::CarouselConfig;
pub use controller::Carousel;
pub use state::{CarouselState, Direction, SlideId};
pub use view::CarouselView;
