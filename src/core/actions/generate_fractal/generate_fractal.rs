use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Computes every pixel of the algorithm's rect on the calling thread, in
/// row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let pixel_rect = algorithm.pixel_rect();

    (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
        .flat_map(|y| {
            (pixel_rect.top_left().x..=pixel_rect.bottom_right().x).map(move |x| Point { x, y })
        })
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubAlgorithm {
        pixel_rect: PixelRect,
        fail_at: Option<Point>,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = (i32, i32);
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if self.fail_at == Some(pixel) {
                return Err(StubError {});
            }

            Ok((pixel.x, pixel.y))
        }

        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }
    }

    #[test]
    fn test_visits_every_pixel_in_row_major_order() {
        let algorithm = StubAlgorithm {
            pixel_rect: PixelRect::new(Point { x: 1, y: 5 }, Point { x: 3, y: 6 }).unwrap(),
            fail_at: None,
        };

        let results = generate_fractal(&algorithm).unwrap();

        assert_eq!(
            results,
            vec![(1, 5), (2, 5), (3, 5), (1, 6), (2, 6), (3, 6)]
        );
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let algorithm = StubAlgorithm {
            pixel_rect: PixelRect::from_size(4, 4).unwrap(),
            fail_at: Some(Point { x: 2, y: 3 }),
        };

        assert_eq!(generate_fractal(&algorithm), Err(StubError {}));
    }
}
