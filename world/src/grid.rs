//! Rectangular cell grid shared by the play session and the editor canvas.

use warehouse_core::{Cell, CellCoord, LevelParseError};

/// Immutable rectangular matrix of cells.
///
/// Grids are value snapshots: every mutation goes through [`Grid::with_cell`],
/// which returns a modified copy, so undo snapshots never alias live state.
/// All rows have equal width for the lifetime of a grid value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: u32,
    rows: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of the provided dimensions filled with a single cell.
    #[must_use]
    pub fn filled(columns: u32, rows: u32, content: Cell) -> Self {
        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            columns,
            rows,
            cells: vec![content; capacity],
        }
    }

    /// Converts textual level rows into a grid plus the player position.
    ///
    /// Rows of unequal width, unknown characters, and levels that do not
    /// contain exactly one player-bearing cell are rejected outright.
    pub fn parse(rows: &[String]) -> Result<(Self, CellCoord), LevelParseError> {
        let expected = rows.first().map_or(0, |row| row.chars().count());
        let mut cells = Vec::with_capacity(expected.saturating_mul(rows.len()));
        let mut player = None;

        for (row_index, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != expected {
                return Err(LevelParseError::RaggedRows {
                    expected,
                    found: width,
                    row: row_index,
                });
            }

            for (column_index, character) in row.chars().enumerate() {
                let Some(content) = Cell::from_char(character) else {
                    return Err(LevelParseError::UnknownCell {
                        character,
                        column: column_index,
                        row: row_index,
                    });
                };

                if content.has_player() {
                    if player.is_some() {
                        return Err(LevelParseError::MultiplePlayers);
                    }
                    player = Some(CellCoord::new(column_index as u32, row_index as u32));
                }
                cells.push(content);
            }
        }

        let Some(player) = player else {
            return Err(LevelParseError::MissingPlayer);
        };

        Ok((
            Self {
                columns: expected as u32,
                rows: rows.len() as u32,
                cells,
            },
            player,
        ))
    }

    /// Serialises the grid back into textual level rows.
    ///
    /// The output is the exact inverse of [`Grid::parse`].
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        if self.columns == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.columns as usize)
            .map(|row| row.iter().map(|cell| cell.to_char()).collect())
            .collect()
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns the content of the provided cell, if it lies within bounds.
    #[must_use]
    pub fn cell(&self, cell: CellCoord) -> Option<Cell> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Returns a copy of the grid with one cell replaced.
    ///
    /// Out-of-bounds coordinates yield an unchanged copy.
    #[must_use]
    pub fn with_cell(&self, cell: CellCoord, content: Cell) -> Self {
        let mut next = self.clone();
        if let Some(index) = next.index(cell) {
            next.cells[index] = content;
        }
        next
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Reports whether every box rests on a goal slot.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Box)
    }

    /// Returns a copy of the grid with every cell passed through `transform`.
    pub(crate) fn map_cells<F>(&self, transform: F) -> Self
    where
        F: Fn(Cell) -> Cell,
    {
        Self {
            columns: self.columns,
            rows: self.rows,
            cells: self.cells.iter().map(|cell| transform(*cell)).collect(),
        }
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}
