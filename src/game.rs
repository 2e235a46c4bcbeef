use crate::{Board, Cell, GameError, Level, Position, RevealOutcome};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reveal,
    Flag,
}

/// One play session: a board plus first-click and win/loss bookkeeping.
#[derive(Debug)]
pub struct Game<R = StdRng> {
    board: Board<R>,
    state: GameState,
    first_reveal: bool,
    triggered_mine: Option<Position>,
}

impl Game<StdRng> {
    pub fn new(rows: usize, cols: usize, mines_count: usize) -> Result<Self, GameError> {
        Ok(Self::with_board(Board::new(rows, cols, mines_count)?))
    }

    pub fn from_level(level: Level) -> Result<Self, GameError> {
        Self::new(level.rows(), level.cols(), level.mines())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_board(board: Board<R>) -> Self {
        Self {
            board,
            state: GameState::Playing,
            first_reveal: true,
            triggered_mine: None,
        }
    }

    pub fn perform_action(&mut self, pos: Position, action: Action) -> Result<GameState, GameError> {
        if self.state != GameState::Playing {
            return Err(GameError::InvalidGameState);
        }

        match action {
            Action::Reveal => self.reveal(pos)?,
            Action::Flag => self.board.toggle_flag(pos)?,
        }
        Ok(self.state)
    }

    fn reveal(&mut self, pos: Position) -> Result<(), GameError> {
        match self.board.reveal(pos, self.first_reveal)? {
            RevealOutcome::MineHit => {
                self.state = GameState::Lost;
                self.triggered_mine = Some(pos);
                debug!(?pos, "mine hit, game lost");
            }
            RevealOutcome::Safe => {
                // A flagged target is a no-op and must not use up the first-click guarantee.
                if self.board.cell(pos)?.is_revealed() {
                    self.first_reveal = false;
                }
                self.check_win_condition();
            }
        }
        Ok(())
    }

    fn check_win_condition(&mut self) {
        if self.board.has_won() {
            self.state = GameState::Won;
            debug!(revealed = self.board.revealed_count(), "all safe cells revealed, game won");
        }
    }
}

impl<R> Game<R> {
    pub fn get_cell(&self, pos: Position) -> Result<&Cell, GameError> {
        self.board.cell(pos)
    }

    pub fn board(&self) -> &Board<R> {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn triggered_mine(&self) -> Option<Position> {
        self.triggered_mine
    }

    /// Mines minus placed flags; negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        self.board.mine_count() as isize - self.board.flag_count() as isize
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.board.dimensions()
    }
}
