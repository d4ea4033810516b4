//! Ray-cast field of view over the tile grid.
//! Rays fan out at a fixed angular step and stop at the first wall, at the
//! grid edge, or past the sight radius. Gaps between neighboring rays at long
//! range are accepted.

use super::*;
use crate::state::Grid;

pub fn compute_visibility(grid: &mut Grid, observer: Pos, radius: i32, ray_step_degrees: u32) {
    grid.clear_visible();
    grid.mark_seen(observer);
    let step = ray_step_degrees.max(1);
    for angle in (0..360).step_by(step as usize) {
        for pos in cast_ray(grid, observer, angle as f32, radius) {
            grid.mark_seen(pos);
        }
    }
}

/// Tiles lit by a single ray, walking from the observer tile center in unit steps.
/// A wall is included and ends the ray.
pub(crate) fn cast_ray(grid: &Grid, observer: Pos, angle_degrees: f32, radius: i32) -> Vec<Pos> {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let origin = Vec2::new(observer.x as f32 + 0.5, observer.y as f32 + 0.5);
    let radius_squared = i64::from(radius) * i64::from(radius);

    let mut lit = Vec::new();
    for step in 1..=radius {
        let distance = step as f32;
        let tile = Vec2::new(origin.x + cos * distance, origin.y + sin * distance).tile();
        if !grid.in_bounds(tile) || tile.distance_squared(observer) > radius_squared {
            break;
        }
        lit.push(tile);
        if grid.is_wall(tile) {
            break;
        }
    }
    lit
}
