//! Minefield state: mine placement, flood-fill reveal, flags, and win/loss.

use rand::{seq::index, Rng};

pub(crate) const GRID_SIZE: usize = 9;
pub(crate) const MINE_COUNT: usize = 10;

const COUNT_COLORS: [&str; 8] = ["blue", "green", "red", "navy", "maroon", "teal", "black", "gray"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) mine: bool,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
    pub(crate) neighbor_mines: u8,
}

impl Cell {
    pub(crate) fn label(&self) -> String {
        if self.flagged {
            "🚩".to_string()
        } else if !self.revealed {
            String::new()
        } else if self.mine {
            "💣".to_string()
        } else if self.neighbor_mines > 0 {
            self.neighbor_mines.to_string()
        } else {
            String::new()
        }
    }

    pub(crate) fn text_color(&self) -> &'static str {
        if !self.revealed || self.neighbor_mines == 0 {
            return "black";
        }
        COUNT_COLORS
            .get(usize::from(self.neighbor_mines) - 1)
            .copied()
            .unwrap_or("black")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub(crate) fn face(self) -> &'static str {
        match self {
            Self::Playing => "😎",
            Self::Won => "🤠",
            Self::Lost => "😵",
        }
    }

    pub(crate) fn banner(self) -> &'static str {
        match self {
            Self::Playing => "",
            Self::Won => "You Win!",
            Self::Lost => "Game Over",
        }
    }
}

/// A square field stored row-major. Once won or lost, reveals and flags are ignored until reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Minefield {
    cells: Vec<Cell>,
    status: GameStatus,
}

impl Minefield {
    /// Lays [`MINE_COUNT`] mines on distinct cells chosen by `rng`.
    pub(crate) fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mines: Vec<(usize, usize)> = index::sample(rng, GRID_SIZE * GRID_SIZE, MINE_COUNT)
            .into_iter()
            .map(|idx| (idx / GRID_SIZE, idx % GRID_SIZE))
            .collect();
        Self::with_mines(&mines)
    }

    /// Builds a field with mines at the given `(row, col)` cells. Out-of-range cells are skipped.
    pub(crate) fn with_mines(mines: &[(usize, usize)]) -> Self {
        let mut cells = vec![Cell::default(); GRID_SIZE * GRID_SIZE];
        for idx in mines.iter().filter_map(|&(row, col)| cell_index(row, col)) {
            cells[idx].mine = true;
        }
        for idx in 0..cells.len() {
            if cells[idx].mine {
                continue;
            }
            let count = neighbors(idx).filter(|&n| cells[n].mine).count();
            cells[idx].neighbor_mines = count as u8;
        }
        Self {
            cells,
            status: GameStatus::Playing,
        }
    }

    pub(crate) fn status(&self) -> GameStatus {
        self.status
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        cell_index(row, col).map(|idx| self.cells[idx])
    }

    /// Mines minus placed flags; negative once the player over-flags.
    pub(crate) fn mines_remaining(&self) -> i32 {
        let flags = self.cells.iter().filter(|cell| cell.flagged).count();
        MINE_COUNT as i32 - flags as i32
    }

    pub(crate) fn counter_text(&self) -> String {
        format!("{:03}", self.mines_remaining())
    }

    pub(crate) fn reveal(&mut self, row: usize, col: usize) {
        if self.status != GameStatus::Playing {
            return;
        }
        let Some(idx) = cell_index(row, col) else {
            return;
        };
        let cell = self.cells[idx];
        if cell.revealed || cell.flagged {
            return;
        }

        if cell.mine {
            self.status = GameStatus::Lost;
            for cell in self.cells.iter_mut().filter(|cell| cell.mine) {
                cell.revealed = true;
            }
            return;
        }

        self.flood_reveal(idx);
        if self.cells.iter().all(|cell| cell.mine || cell.revealed) {
            self.status = GameStatus::Won;
        }
    }

    pub(crate) fn toggle_flag(&mut self, row: usize, col: usize) {
        if self.status != GameStatus::Playing {
            return;
        }
        let Some(idx) = cell_index(row, col) else {
            return;
        };
        let cell = &mut self.cells[idx];
        if !cell.revealed {
            cell.flagged = !cell.flagged;
        }
    }

    // Zero-count cells open their neighbors; flagged cells stay closed.
    fn flood_reveal(&mut self, start: usize) {
        let mut pending = vec![start];
        while let Some(idx) = pending.pop() {
            let cell = &mut self.cells[idx];
            if cell.revealed || cell.flagged {
                continue;
            }
            cell.revealed = true;
            if cell.neighbor_mines == 0 {
                pending.extend(neighbors(idx));
            }
        }
    }
}

fn cell_index(row: usize, col: usize) -> Option<usize> {
    (row < GRID_SIZE && col < GRID_SIZE).then_some(row * GRID_SIZE + col)
}

fn neighbors(idx: usize) -> impl Iterator<Item = usize> {
    let (row, col) = (idx / GRID_SIZE, idx % GRID_SIZE);
    (-1_isize..=1)
        .flat_map(|dr| (-1_isize..=1).map(move |dc| (dr, dc)))
        .filter(|&offset| offset != (0, 0))
        .filter_map(move |(dr, dc)| {
            cell_index(row.checked_add_signed(dr)?, col.checked_add_signed(dc)?)
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    fn revealed_count(field: &Minefield) -> usize {
        field.cells.iter().filter(|cell| cell.revealed).count()
    }

    #[test]
    fn generated_fields_hold_exactly_ten_mines() {
        let field = Minefield::generate(&mut SmallRng::seed_from_u64(7));
        assert_eq!(field.cells.iter().filter(|cell| cell.mine).count(), MINE_COUNT);
        assert_eq!(field.status(), GameStatus::Playing);
        assert_eq!(
            field,
            Minefield::generate(&mut SmallRng::seed_from_u64(7)),
            "same seed, same layout"
        );
    }

    #[test]
    fn neighbor_counts_cover_all_eight_directions() {
        let field = Minefield::with_mines(&[(0, 0), (0, 1), (2, 2)]);
        assert_eq!(field.cell(1, 1).map(|cell| cell.neighbor_mines), Some(3));
        assert_eq!(field.cell(1, 0).map(|cell| cell.neighbor_mines), Some(2));
        assert_eq!(field.cell(0, 2).map(|cell| cell.neighbor_mines), Some(1));
        assert_eq!(field.cell(8, 8).map(|cell| cell.neighbor_mines), Some(0));
        assert_eq!(field.cell(9, 0), None);
    }

    #[test]
    fn numbered_cell_reveals_only_itself() {
        let mut field = Minefield::with_mines(&[(0, 0)]);
        field.reveal(0, 1);
        assert_eq!(revealed_count(&field), 1);
        assert_eq!(field.cell(0, 1).map(|cell| cell.label()), Some("1".to_string()));
        assert_eq!(field.status(), GameStatus::Playing);
    }

    #[test]
    fn flood_fill_opening_every_safe_cell_wins() {
        let mut field = Minefield::with_mines(&[(8, 8)]);
        field.reveal(0, 0);
        assert_eq!(revealed_count(&field), GRID_SIZE * GRID_SIZE - 1);
        assert_eq!(field.status(), GameStatus::Won);
        assert_eq!(field.status().face(), "🤠");
    }

    #[test]
    fn flood_fill_stops_at_flags() {
        let mut field = Minefield::with_mines(&[(8, 8)]);
        field.toggle_flag(4, 4);
        field.reveal(0, 0);
        assert_eq!(field.cell(4, 4).map(|cell| cell.revealed), Some(false));
        assert_eq!(field.status(), GameStatus::Playing);

        field.toggle_flag(4, 4);
        field.reveal(4, 4);
        assert_eq!(field.status(), GameStatus::Won);
    }

    #[test]
    fn hitting_a_mine_loses_and_exposes_every_mine() {
        let mut field = Minefield::with_mines(&[(0, 0), (5, 5)]);
        field.reveal(5, 5);
        assert_eq!(field.status(), GameStatus::Lost);
        assert_eq!(field.cell(0, 0).map(|cell| cell.label()), Some("💣".to_string()));
        assert_eq!(field.status().banner(), "Game Over");

        let before = field.clone();
        field.reveal(3, 3);
        field.toggle_flag(3, 3);
        assert_eq!(field, before);
    }

    #[test]
    fn flags_block_reveal_and_drive_the_counter() {
        let mut field = Minefield::with_mines(&[(0, 0)]);
        assert_eq!(field.counter_text(), "010");
        field.toggle_flag(0, 0);
        field.reveal(0, 0);
        assert_eq!(field.status(), GameStatus::Playing);
        assert_eq!(field.counter_text(), "009");

        for col in 1..GRID_SIZE {
            field.toggle_flag(1, col);
        }
        field.toggle_flag(2, 0);
        field.toggle_flag(2, 1);
        assert_eq!(field.mines_remaining(), -1);
        assert_eq!(field.counter_text(), "-01");
    }

    #[test]
    fn revealed_cells_cannot_be_flagged() {
        let mut field = Minefield::with_mines(&[(0, 0)]);
        field.reveal(0, 1);
        field.toggle_flag(0, 1);
        assert_eq!(field.cell(0, 1).map(|cell| cell.flagged), Some(false));
        assert_eq!(field.cell(0, 1).map(|cell| cell.text_color()), Some("blue"));
    }
}
