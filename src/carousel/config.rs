use std::time::Duration;

use crate::constants::*;
use crate::error::{CarouselError, Result};

/// Validated carousel settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub slide_count: usize,
    pub slide_interval: Duration,
    pub progress_tick: Duration,
    pub swipe_threshold: f32,
    pub start_playing: bool,
    pub seed: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slide_count: DEFAULT_SLIDE_COUNT,
            slide_interval: Duration::from_millis(SLIDE_INTERVAL_MS),
            progress_tick: Duration::from_millis(PROGRESS_TICK_MS),
            swipe_threshold: SWIPE_THRESHOLD,
            start_playing: true,
            seed: None,
        }
    }
}

impl CarouselConfig {
    pub fn validate(self) -> Result<Self> {
        if self.slide_count == 0 {
            return Err(CarouselError::NoSlides);
        }
        if self.progress_tick.is_zero() || self.slide_interval < self.progress_tick {
            return Err(CarouselError::InvalidInterval {
                interval_ms: self.slide_interval.as_millis() as u64,
                tick_ms: self.progress_tick.as_millis() as u64,
            });
        }
        Ok(self)
    }

    pub fn with_slide_count(mut self, slide_count: usize) -> Self {
        self.slide_count = slide_count;
        self
    }

    /// Percentage added to the progress bar on every progress tick.
    pub fn progress_step(&self) -> f32 {
        (100 * self.progress_tick.as_millis()) as f32 / self.slide_interval.as_millis() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_the_bar_in_forty_ticks() {
        let config = CarouselConfig::default().validate().expect("defaults are valid");
        assert_eq!(config.slide_count, 8);
        assert!((config.progress_step() - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_slides_is_rejected() {
        let err = CarouselConfig::default().with_slide_count(0).validate().unwrap_err();
        assert!(matches!(err, CarouselError::NoSlides));
    }

    #[test]
    fn interval_shorter_than_tick_is_rejected() {
        let config = CarouselConfig {
            slide_interval: Duration::from_millis(50),
            ..CarouselConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CarouselError::InvalidInterval { interval_ms: 50, tick_ms: 100 })
        ));
    }
}
