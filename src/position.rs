use itertools::iproduct;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Up to 8 surrounding positions, clipped to a `rows x cols` grid.
    pub fn neighbors(&self, rows: usize, cols: usize) -> impl Iterator<Item = Position> {
        let Position { row, col } = *self;
        iproduct!(-1isize..=1, -1isize..=1).filter_map(move |(dr, dc)| {
            if dr == 0 && dc == 0 {
                return None;
            }
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < rows && c < cols).then_some(Position::new(r, c))
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
