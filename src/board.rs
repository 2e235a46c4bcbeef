use crate::{Cell, GameError, Position};
use itertools::iproduct;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    Safe,
    MineHit,
}

/// Grid of cells plus the random source used for placing and relocating mines.
#[derive(Debug)]
pub struct Board<R = StdRng> {
    cells: Array2<Cell>,
    mine_count: usize,
    rng: R,
}

impl Board<StdRng> {
    pub fn new(rows: usize, cols: usize, mine_count: usize) -> Result<Self, GameError> {
        Self::with_rng(rows, cols, mine_count, StdRng::from_entropy())
    }

    pub fn seeded(rows: usize, cols: usize, mine_count: usize, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(rows, cols, mine_count, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Board<R> {
    /// Places `mine_count` mines uniformly at random, without replacement.
    pub fn with_rng(
        rows: usize,
        cols: usize,
        mine_count: usize,
        mut rng: R,
    ) -> Result<Self, GameError> {
        let total = validate(rows, cols, mine_count)?;
        let mut cells = Array2::from_elem((rows, cols), Cell::default());
        for i in index::sample(&mut rng, total, mine_count) {
            cells[(i / cols, i % cols)].mine = true;
        }

        let mut board = Board {
            cells,
            mine_count,
            rng,
        };
        board.compute_adjacency();
        debug!(rows, cols, mine_count, "board created");
        Ok(board)
    }

    /// Builds a board with mines at exactly the given positions. Duplicates collapse.
    pub fn with_mines(
        rows: usize,
        cols: usize,
        mines: impl IntoIterator<Item = Position>,
        rng: R,
    ) -> Result<Self, GameError> {
        validate(rows, cols, 0)?;
        let mines: BTreeSet<Position> = mines.into_iter().collect();
        if let Some(&pos) = mines.iter().find(|p| p.row >= rows || p.col >= cols) {
            return Err(GameError::OutOfBounds(pos));
        }
        validate(rows, cols, mines.len())?;

        let mut cells = Array2::from_elem((rows, cols), Cell::default());
        for pos in &mines {
            cells[(pos.row, pos.col)].mine = true;
        }

        let mut board = Board {
            cells,
            mine_count: mines.len(),
            rng,
        };
        board.compute_adjacency();
        debug!(rows, cols, mine_count = mines.len(), "board created from fixed layout");
        Ok(board)
    }

    /// Reveals `pos`, cascading through zero-count regions.
    ///
    /// Revealed and flagged targets are left untouched and report [`RevealOutcome::Safe`].
    /// When `is_first_reveal` is set, a mine under `pos` is moved elsewhere first so
    /// the reveal can never hit it.
    pub fn reveal(&mut self, pos: Position, is_first_reveal: bool) -> Result<RevealOutcome, GameError> {
        let cell = *self.cell(pos)?;
        if cell.revealed || cell.flagged {
            return Ok(RevealOutcome::Safe);
        }

        if cell.mine {
            if !is_first_reveal {
                return Ok(RevealOutcome::MineHit);
            }
            if !self.relocate_mine(pos) {
                warn!(?pos, "no free cell to relocate first-click mine to");
                return Ok(RevealOutcome::MineHit);
            }
        }

        let revealed = self.flood_reveal(pos);
        trace!(?pos, revealed, "reveal cascade finished");
        Ok(RevealOutcome::Safe)
    }

    fn relocate_mine(&mut self, from: Position) -> bool {
        let free: Vec<Position> = self
            .positions()
            .filter(|p| !self.cells[(p.row, p.col)].mine)
            .collect();
        let Some(&to) = free.choose(&mut self.rng) else {
            return false;
        };

        self.cells[(from.row, from.col)].mine = false;
        self.cells[(to.row, to.col)].mine = true;
        self.compute_adjacency();
        debug!(?from, ?to, "relocated mine away from first reveal");
        true
    }

    fn flood_reveal(&mut self, start: Position) -> usize {
        let (rows, cols) = self.dimensions();
        let mut stack = vec![start];
        let mut revealed = 0;

        while let Some(pos) = stack.pop() {
            let cell = &mut self.cells[(pos.row, pos.col)];
            if cell.revealed {
                continue;
            }
            cell.revealed = true;
            cell.flagged = false;
            revealed += 1;

            if !cell.mine && cell.adjacent_mines == 0 {
                stack.extend(
                    pos.neighbors(rows, cols)
                        .filter(|n| !self.cells[(n.row, n.col)].revealed),
                );
            }
        }

        revealed
    }
}

impl<R> Board<R> {
    fn compute_adjacency(&mut self) {
        let (rows, cols) = self.dimensions();
        for pos in self.positions() {
            let count = pos
                .neighbors(rows, cols)
                .filter(|n| self.cells[(n.row, n.col)].mine)
                .count() as u8;
            let cell = &mut self.cells[(pos.row, pos.col)];
            cell.adjacent_mines = if cell.mine { 0 } else { count };
        }
    }

    pub fn add_flag(&mut self, pos: Position) -> Result<(), GameError> {
        self.cell_mut(pos)?.flagged = true;
        Ok(())
    }

    pub fn remove_flag(&mut self, pos: Position) -> Result<(), GameError> {
        self.cell_mut(pos)?.flagged = false;
        Ok(())
    }

    /// Flips the flag on an unrevealed cell; revealed cells are left alone.
    pub fn toggle_flag(&mut self, pos: Position) -> Result<(), GameError> {
        let cell = self.cell_mut(pos)?;
        if !cell.revealed {
            cell.flagged = !cell.flagged;
        }
        Ok(())
    }

    /// True once the unrevealed cells are exactly as many as the mines.
    ///
    /// Mines are never revealed, so this is equivalent to every safe cell being revealed.
    pub fn has_won(&self) -> bool {
        self.cells.iter().filter(|c| !c.revealed).count() == self.mine_count
    }

    pub fn contains(&self, pos: Position) -> bool {
        let (rows, cols) = self.dimensions();
        pos.row < rows && pos.col < cols
    }

    pub fn cell(&self, pos: Position) -> Result<&Cell, GameError> {
        self.cells
            .get((pos.row, pos.col))
            .ok_or(GameError::OutOfBounds(pos))
    }

    fn cell_mut(&mut self, pos: Position) -> Result<&mut Cell, GameError> {
        self.cells
            .get_mut((pos.row, pos.col))
            .ok_or(GameError::OutOfBounds(pos))
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (rows, cols) = self.dimensions();
        iproduct!(0..rows, 0..cols).map(Position::from)
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.mine)
            .map(|(idx, _)| Position::from(idx))
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn flag_count(&self) -> usize {
        self.cells.iter().filter(|c| c.flagged).count()
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.revealed).count()
    }
}

fn validate(rows: usize, cols: usize, mines: usize) -> Result<usize, GameError> {
    let invalid = GameError::InvalidConfiguration { rows, cols, mines };
    if rows == 0 || cols == 0 {
        return Err(invalid);
    }
    match rows.checked_mul(cols) {
        Some(total) if mines < total => Ok(total),
        _ => Err(invalid),
    }
}
