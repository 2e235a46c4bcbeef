/// One grid position.
///
/// Mines carry no meaningful adjacency count, which is why
/// [`Cell::adjacent_mine_count`] returns `None` for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub(crate) mine: bool,
    pub(crate) adjacent_mines: u8,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
}

impl Cell {
    pub fn is_mine(&self) -> bool {
        self.mine
    }

    pub fn adjacent_mine_count(&self) -> Option<u8> {
        (!self.mine).then_some(self.adjacent_mines)
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }
}
