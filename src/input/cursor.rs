use tswap::game::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Keyboard stand-in for the mouse pointer. Stays on the board.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    pub pos: Pos,
    rows: usize,
    cols: usize,
}

impl Cursor {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            pos: Pos::new(rows / 2, cols / 2),
            rows,
            cols,
        }
    }

    pub fn shift(&mut self, dir: CursorDirection) {
        let Pos { row, col } = self.pos;
        self.pos = match dir {
            CursorDirection::Up => Pos::new(row.saturating_sub(1), col),
            CursorDirection::Down => Pos::new((row + 1).min(self.rows - 1), col),
            CursorDirection::Left => Pos::new(row, col.saturating_sub(1)),
            CursorDirection::Right => Pos::new(row, (col + 1).min(self.cols - 1)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_on_the_board() {
        let mut cursor = Cursor::new(3, 3);
        assert_eq!(cursor.pos, Pos::new(1, 1));
        for _ in 0..5 {
            cursor.shift(CursorDirection::Up);
            cursor.shift(CursorDirection::Right);
        }
        assert_eq!(cursor.pos, Pos::new(0, 2));
        for _ in 0..5 {
            cursor.shift(CursorDirection::Down);
            cursor.shift(CursorDirection::Left);
        }
        assert_eq!(cursor.pos, Pos::new(2, 0));
    }
}
