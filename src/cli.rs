use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::carousel::config::CarouselConfig;
use crate::constants::*;
use crate::engine::SlideSource;
use crate::error::Result;

/// Slide carousel with autoplay, shuffle, keyboard and swipe navigation
#[derive(Parser, Debug)]
#[command(name = "carousel", version, long_about = None)]
pub struct Args {
    /// Directory of images to show; numbered placeholder slides are used when omitted
    pub directory: Option<PathBuf>,

    /// Number of placeholder slides (ignored with an image directory)
    #[arg(long, default_value_t = DEFAULT_SLIDE_COUNT)]
    pub slides: usize,

    /// Milliseconds each slide stays before autoplay advances
    #[arg(long, default_value_t = SLIDE_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Seed for reproducible shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with autoplay paused
    #[arg(long)]
    pub paused: bool,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    pub height: i32,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn carousel_config(&self) -> Result<CarouselConfig> {
        CarouselConfig {
            slide_count: self.slides,
            slide_interval: Duration::from_millis(self.interval_ms),
            start_playing: !self.paused,
            seed: self.seed,
            ..CarouselConfig::default()
        }
        .validate()
    }

    pub fn slide_source(&self) -> SlideSource {
        match &self.directory {
            Some(directory) => SlideSource::Directory(directory.clone()),
            None => SlideSource::Placeholders(self.slides),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CarouselError;

    #[test]
    fn defaults_describe_eight_placeholder_slides() {
        let args = Args::try_parse_from(["carousel"]).unwrap();
        assert_eq!(args.slide_source(), SlideSource::Placeholders(8));
        let config = args.carousel_config().unwrap();
        assert_eq!(config.slide_interval, Duration::from_millis(4000));
        assert!(config.start_playing);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn directory_and_flags_are_parsed() {
        let args = Args::try_parse_from([
            "carousel",
            "photos",
            "--interval-ms",
            "2500",
            "--seed",
            "9",
            "--paused",
        ])
        .unwrap();
        assert_eq!(args.slide_source(), SlideSource::Directory(PathBuf::from("photos")));
        let config = args.carousel_config().unwrap();
        assert_eq!(config.slide_interval, Duration::from_millis(2500));
        assert_eq!(config.seed, Some(9));
        assert!(!config.start_playing);
    }

    #[test]
    fn zero_slides_fail_validation() {
        let args = Args::try_parse_from(["carousel", "--slides", "0"]).unwrap();
        assert!(matches!(args.carousel_config(), Err(CarouselError::NoSlides)));
    }
}
