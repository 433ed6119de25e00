use std::collections::HashMap;

use macroquad::prelude::Vec2;

use super::NeighborSearch;
use crate::boid::Boid;

/// Uniform grid over boid positions.
///
/// `cell_size` should be on the order of the query radius (often equal to
/// it). Queries with a larger radius just widen the searched cell square, so
/// the grid never needs a rebuild when the radius slider moves.
pub struct SpatialHashNeighborSearch {
    cell_size: f32,
    grid: HashMap<(i32, i32), Vec<usize>>,
}

impl SpatialHashNeighborSearch {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            grid: HashMap::new(),
        }
    }

    #[inline]
    fn cell_of(&self, pos: Vec2) -> (i32, i32) {
        // The saturating float-to-int cast keeps NaN positions in a fixed
        // cell, so insert and remove stay consistent for them too.
        let cx = (pos.x / self.cell_size).floor() as i32;
        let cy = (pos.y / self.cell_size).floor() as i32;
        (cx, cy)
    }
}

impl NeighborSearch for SpatialHashNeighborSearch {
    fn rebuild(&mut self, boids: &[Boid]) {
        self.grid.clear();

        for (i, boid) in boids.iter().enumerate() {
            let cell = self.cell_of(boid.pos);
            self.grid.entry(cell).or_default().push(i);
        }
    }

    fn neighbors(&self, boids: &[Boid], index: usize, radius: f32) -> Vec<usize> {
        let r2 = radius * radius;
        let pos = boids[index].pos;
        let (cx, cy) = self.cell_of(pos);

        // Any boid within `radius` sits at most this many cells away.
        let reach = (radius / self.cell_size).ceil() as i32;

        let mut found = Vec::new();
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if let Some(indices) = self.grid.get(&(cx + dx, cy + dy)) {
                    for &j in indices {
                        if j == index {
                            continue;
                        }
                        if (boids[j].pos - pos).length_squared() < r2 {
                            found.push(j);
                        }
                    }
                }
            }
        }

        // Flock order, same as the brute-force scan. Relocations shuffle the
        // per-cell vectors, so this also keeps queries deterministic.
        found.sort_unstable();
        found
    }

    fn relocate(&mut self, index: usize, old_pos: Vec2, new_pos: Vec2) {
        let old_cell = self.cell_of(old_pos);
        let new_cell = self.cell_of(new_pos);
        if old_cell == new_cell {
            return;
        }

        if let Some(indices) = self.grid.get_mut(&old_cell) {
            if let Some(at) = indices.iter().position(|&j| j == index) {
                indices.swap_remove(at);
            }
        }
        self.grid.entry(new_cell).or_default().push(index);
    }

    fn name(&self) -> &'static str {
        "SpatialHash"
    }
}
