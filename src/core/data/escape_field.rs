use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EscapeFieldError {
    BoundsMismatch {
        pixel_rect_size: usize,
        counts_len: usize,
    },
    CountExceedsMax {
        index: usize,
        count: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for EscapeFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                counts_len,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match {} iteration counts",
                    pixel_rect_size, counts_len
                )
            }
            Self::CountExceedsMax {
                index,
                count,
                max_iterations,
            } => {
                write!(
                    f,
                    "iteration count {} at index {} exceeds maximum {}",
                    count, index, max_iterations
                )
            }
        }
    }
}

impl Error for EscapeFieldError {}

/// Row-major iteration counts, one per grid sample. Row 0 is the row with the
/// smallest imaginary part. A count equal to `max_iterations` means the sample
/// never escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeField {
    pixel_rect: PixelRect,
    max_iterations: u32,
    counts: Vec<u32>,
}

impl EscapeField {
    pub fn from_counts(
        pixel_rect: PixelRect,
        max_iterations: u32,
        counts: Vec<u32>,
    ) -> Result<Self, EscapeFieldError> {
        if pixel_rect.size() != counts.len() {
            return Err(EscapeFieldError::BoundsMismatch {
                pixel_rect_size: pixel_rect.size(),
                counts_len: counts.len(),
            });
        }

        if let Some((index, &count)) = counts
            .iter()
            .enumerate()
            .find(|&(_, &count)| count > max_iterations)
        {
            return Err(EscapeFieldError::CountExceedsMax {
                index,
                count,
                max_iterations,
            });
        }

        Ok(Self {
            pixel_rect,
            max_iterations,
            counts,
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[must_use]
    pub fn get(&self, pixel: Point) -> Option<u32> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        self.counts
            .get(relative_y * self.width() as usize + relative_x)
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.counts.chunks(self.width() as usize)
    }

    /// Number of samples that never escaped.
    #[must_use]
    pub fn bounded_count(&self) -> usize {
        self.counts
            .iter()
            .filter(|&&count| count == self.max_iterations)
            .count()
    }

    /// ln(count + 1) per sample, the display transform used by the viewers.
    #[must_use]
    pub fn log_scaled(&self) -> Vec<f64> {
        self.counts
            .iter()
            .map(|&count| f64::from(count).ln_1p())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_3x2() -> EscapeField {
        let pixel_rect = PixelRect::from_size(3, 2).unwrap();
        EscapeField::from_counts(pixel_rect, 10, vec![1, 2, 10, 4, 10, 6]).unwrap()
    }

    #[test]
    fn test_from_counts_rejects_size_mismatch() {
        let pixel_rect = PixelRect::from_size(2, 2).unwrap();

        let result = EscapeField::from_counts(pixel_rect, 10, vec![1, 2, 3]);

        assert_eq!(
            result,
            Err(EscapeFieldError::BoundsMismatch {
                pixel_rect_size: 4,
                counts_len: 3
            })
        );
    }

    #[test]
    fn test_from_counts_rejects_count_above_max() {
        let pixel_rect = PixelRect::from_size(2, 2).unwrap();

        let result = EscapeField::from_counts(pixel_rect, 10, vec![1, 11, 3, 4]);

        assert_eq!(
            result,
            Err(EscapeFieldError::CountExceedsMax {
                index: 1,
                count: 11,
                max_iterations: 10
            })
        );
    }

    #[test]
    fn test_get_is_row_major() {
        let field = field_3x2();

        assert_eq!(field.get(Point { x: 0, y: 0 }), Some(1));
        assert_eq!(field.get(Point { x: 2, y: 0 }), Some(10));
        assert_eq!(field.get(Point { x: 0, y: 1 }), Some(4));
        assert_eq!(field.get(Point { x: 3, y: 0 }), None);
    }

    #[test]
    fn test_rows() {
        let field = field_3x2();
        let rows: Vec<&[u32]> = field.rows().collect();
        let expected: Vec<&[u32]> = vec![&[1, 2, 10], &[4, 10, 6]];

        assert_eq!(rows, expected);
    }

    #[test]
    fn test_bounded_count() {
        assert_eq!(field_3x2().bounded_count(), 2);
    }

    #[test]
    fn test_log_scaled_is_monotonic() {
        let field = field_3x2();
        let scaled = field.log_scaled();

        assert_eq!(scaled.len(), 6);
        assert!((scaled[0] - 2f64.ln()).abs() < 1e-12);
        assert!(scaled[0] < scaled[1]);
        assert!(scaled[1] < scaled[2]);
    }
}
