use rand::Rng;

use crate::core::data::vec2::Vec2;
use crate::core::fractals::sierpinski::errors::SierpinskiError;
use crate::core::fractals::sierpinski::triangle::Triangle;

/// Chaos game seeded uniformly from the triangle's bounding box.
pub fn chaos_game<R: Rng + ?Sized>(
    triangle: &Triangle,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Vec2>, SierpinskiError> {
    if count == 0 {
        return Err(SierpinskiError::ZeroPointCount);
    }

    let seed = triangle.sample_bounding_box(rng);

    chaos_game_from_seed(triangle, seed, count, rng)
}

/// Returns `count` points starting with `seed`. Each later point is the
/// midpoint of its predecessor and a vertex drawn uniformly at random.
pub fn chaos_game_from_seed<R: Rng + ?Sized>(
    triangle: &Triangle,
    seed: Vec2,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Vec2>, SierpinskiError> {
    if count == 0 {
        return Err(SierpinskiError::ZeroPointCount);
    }

    let vertices = triangle.vertices();
    let mut points = Vec::with_capacity(count);
    let mut current = seed;

    points.push(current);

    for _ in 1..count {
        let vertex = vertices[rng.gen_range(0..vertices.len())];

        current = current.midpoint(vertex);
        points.push(current);
    }

    Ok(points)
}
