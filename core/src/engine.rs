use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
}

impl GameState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PressOutcome {
    Toggled,
    Won,
}

impl PressOutcome {
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Gameplay wrapper around [`LightGrid`]: validates incoming coordinates,
/// swaps in the flipped grid on each press, and holds the Playing/Won state.
/// Won is terminal; presses after it are rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    grid: LightGrid,
    state: GameState,
}

impl PlayEngine {
    pub fn new(grid: LightGrid) -> Self {
        let state = if grid.all_unlit() {
            GameState::Won
        } else {
            GameState::Playing
        };
        Self { grid, state }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn grid(&self) -> &LightGrid {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn lit_count(&self) -> CellCount {
        self.grid.lit_count()
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.grid.is_lit(coords)
    }

    pub fn press(&mut self, coords: Coord2) -> Result<PressOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_playing()?;

        self.grid = self.grid.flip_around(coords);

        Ok(if self.grid.all_unlit() {
            self.state = GameState::Won;
            PressOutcome::Won
        } else {
            PressOutcome::Toggled
        })
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_won() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(size: Coord2, lit: &[Coord2]) -> PlayEngine {
        PlayEngine::new(LightGrid::from_lit_coords(size, lit).unwrap())
    }

    #[test]
    fn press_toggles_target_and_orthogonal_neighbors() {
        let mut engine = engine((3, 3), &[(1, 1)]);

        let outcome = engine.press((1, 1)).unwrap();

        assert_eq!(outcome, PressOutcome::Toggled);
        assert!(!engine.is_lit((1, 1)));
        assert!(engine.is_lit((0, 1)));
        assert!(engine.is_lit((2, 1)));
        assert!(engine.is_lit((1, 0)));
        assert!(engine.is_lit((1, 2)));
        assert!(!engine.is_lit((0, 0)));
        assert_eq!(engine.lit_count(), 4);
    }

    #[test]
    fn press_on_single_lit_cell_wins() {
        let mut engine = engine((1, 1), &[(0, 0)]);

        assert_eq!(engine.press((0, 0)).unwrap(), PressOutcome::Won);
        assert_eq!(engine.state(), GameState::Won);
        assert!(engine.grid().all_unlit());
    }

    #[test]
    fn won_game_rejects_further_presses() {
        let mut engine = engine((1, 1), &[(0, 0)]);
        engine.press((0, 0)).unwrap();

        assert_eq!(engine.press((0, 0)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn out_of_range_press_is_rejected() {
        let mut engine = engine((2, 2), &[(0, 0)]);

        assert_eq!(engine.press((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(engine.state(), GameState::Playing);
    }

    #[test]
    fn all_unlit_grid_starts_won() {
        let engine = engine((3, 3), &[]);

        assert!(engine.is_won());
    }

    #[test]
    fn press_flipping_every_light_off_wins() {
        let mut both_lit = engine((2, 1), &[(0, 0), (1, 0)]);

        assert_eq!(both_lit.press((0, 0)).unwrap(), PressOutcome::Won);
    }

    #[test]
    fn press_can_light_a_neighbor_back_up() {
        let mut one_lit = engine((2, 1), &[(0, 0)]);

        assert_eq!(one_lit.press((0, 0)).unwrap(), PressOutcome::Toggled);
        assert_eq!(one_lit.lit_count(), 1);
        assert!(one_lit.is_lit((1, 0)));
    }
}
