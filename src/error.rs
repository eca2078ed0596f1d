use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CarouselError>;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one slide")]
    NoSlides,

    #[error("slide interval must be at least one progress tick ({tick_ms} ms), got {interval_ms} ms")]
    InvalidInterval { interval_ms: u64, tick_ms: u64 },

    #[error("slide index {index} is out of range for {total} slides")]
    SlideOutOfRange { index: usize, total: usize },

    #[error("failed to read image directory {path:?}")]
    ImageDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no image files found in directory {0:?}")]
    NoImages(PathBuf),

    #[error("failed to load image {path:?}: {reason}")]
    ImageLoad { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_total() {
        let err = CarouselError::SlideOutOfRange { index: 9, total: 8 };
        assert_eq!(err.to_string(), "slide index 9 is out of range for 8 slides");
    }

    #[test]
    fn directory_error_keeps_io_source() {
        let err = CarouselError::ImageDirectory {
            path: PathBuf::from("/missing"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
