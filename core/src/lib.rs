#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub light_chance: f64,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, light_chance: f64) -> Self {
        Self { size, light_chance }
    }

    pub fn new((size_x, size_y): Coord2, light_chance: f64) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        let light_chance = light_chance.clamp(0.0, 1.0);
        Self::new_unchecked((size_x, size_y), light_chance)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((5, 5), 0.25)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightGrid {
    lights: Array2<bool>,
    lit_count: CellCount,
}

impl LightGrid {
    pub fn from_light_mask(lights: Array2<bool>) -> Self {
        let lit_count = lights
            .iter()
            .filter(|&&is_lit| is_lit)
            .count()
            .try_into()
            .unwrap();
        Self { lights, lit_count }
    }

    pub fn from_lit_coords(size: Coord2, lit_coords: &[Coord2]) -> Result<Self> {
        let mut lights: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in lit_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            lights[coords.to_nd_index()] = true;
        }

        Ok(Self::from_light_mask(lights))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.lights.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.lights.len().try_into().unwrap()
    }

    pub fn lit_count(&self) -> CellCount {
        self.lit_count
    }

    /// Win condition: every cell in the grid is unlit.
    pub fn all_unlit(&self) -> bool {
        self.lit_count == 0
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Returns a copy of this grid with the cell at `coords` and its in-bounds
    /// orthogonal neighbors inverted. Neighbors outside the grid are skipped;
    /// `coords` itself must be in bounds.
    pub fn flip_around(&self, coords: Coord2) -> Self {
        let mut lights = self.lights.clone();

        let center = coords.to_nd_index();
        lights[center] = !lights[center];
        for pos in self.lights.iter_neighbors(coords) {
            let index = pos.to_nd_index();
            lights[index] = !lights[index];
        }

        Self::from_light_mask(lights)
    }
}

impl Index<Coord2> for LightGrid {
    type Output = bool;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.lights[(x as usize, y as usize)]
    }
}
