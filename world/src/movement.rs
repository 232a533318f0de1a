//! Pure move and push resolution for the play session.

use warehouse_core::{Cell, CellCoord, Direction, MoveRejection};

use crate::grid::Grid;

/// Complete result of a successfully resolved move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Grid after the move, with the player and any pushed box relocated.
    pub grid: Grid,
    /// Cell the player occupies after the move.
    pub player: CellCoord,
    /// Indicates whether the move displaced a box.
    pub pushed: bool,
}

/// Resolves a single player step against an immutable grid.
///
/// The operation is atomic: either a complete new grid and position are
/// returned, or a rejection with the inputs untouched. A box is only ever
/// displaced as part of a fully legal push; rejected pushes move nothing.
pub fn resolve(
    grid: &Grid,
    player: CellCoord,
    direction: Direction,
) -> Result<MoveOutcome, MoveRejection> {
    let destination = neighbour(grid, player, direction).ok_or(MoveRejection::OutOfBounds)?;
    let destination_content = grid.cell(destination).ok_or(MoveRejection::OutOfBounds)?;

    let (stepped, pushed) = match destination_content {
        Cell::Floor | Cell::Target => (grid.clone(), false),
        Cell::Box | Cell::BoxOnTarget => {
            let box_destination =
                neighbour(grid, destination, direction).ok_or(MoveRejection::OutOfBounds)?;
            let box_content = grid
                .cell(box_destination)
                .ok_or(MoveRejection::OutOfBounds)?;
            match box_content {
                Cell::Floor => (grid.with_cell(box_destination, Cell::Box), true),
                Cell::Target => (grid.with_cell(box_destination, Cell::BoxOnTarget), true),
                Cell::Wall => return Err(MoveRejection::BlockedByWall),
                Cell::Box | Cell::BoxOnTarget => return Err(MoveRejection::BlockedByBox),
                // A second player cell cannot occur in a valid session.
                Cell::Player | Cell::PlayerOnTarget => return Err(MoveRejection::BlockedByBox),
            }
        }
        Cell::Wall => return Err(MoveRejection::BlockedByWall),
        // A second player cell cannot occur in a valid session.
        Cell::Player | Cell::PlayerOnTarget => return Err(MoveRejection::BlockedByWall),
    };

    let vacated = if grid.cell(player).is_some_and(Cell::has_target) {
        Cell::Target
    } else {
        Cell::Floor
    };
    let entered = if destination_content.has_target() {
        Cell::PlayerOnTarget
    } else {
        Cell::Player
    };

    Ok(MoveOutcome {
        grid: stepped.with_cell(player, vacated).with_cell(destination, entered),
        player: destination,
        pushed,
    })
}

/// Computes the in-bounds neighbour of a cell in the provided direction.
fn neighbour(grid: &Grid, cell: CellCoord, direction: Direction) -> Option<CellCoord> {
    let (column, row) = (cell.column(), cell.row());
    let next = match direction {
        Direction::Up => CellCoord::new(column, row.checked_sub(1)?),
        Direction::Down => CellCoord::new(column, row.checked_add(1)?),
        Direction::Left => CellCoord::new(column.checked_sub(1)?, row),
        Direction::Right => CellCoord::new(column.checked_add(1)?, row),
    };
    (next.column() < grid.columns() && next.row() < grid.rows()).then_some(next)
}
