//! Editor canvas mutation and save-time validation.

use warehouse_core::{Cell, CellCoord, EditorTool, LevelError};

use crate::grid::Grid;

/// Applies an editor tool to one cell of the canvas, returning the mutated
/// copy.
///
/// Placement composes with goal slots: boxes and the player keep the
/// target-ness of the cell they are placed on, and the target tool is
/// additive and idempotent — it never removes an existing goal slot. Placing
/// the player clears any previous player-bearing cell first, so at most one
/// exists after any placement. Out-of-bounds coordinates yield an unchanged
/// copy.
#[must_use]
pub fn apply_tool(grid: &Grid, cell: CellCoord, tool: EditorTool) -> Grid {
    let Some(current) = grid.cell(cell) else {
        return grid.clone();
    };

    match tool {
        EditorTool::Wall => grid.with_cell(cell, Cell::Wall),
        EditorTool::Erase => grid.with_cell(cell, Cell::Floor),
        EditorTool::Box => {
            let content = if current.has_target() {
                Cell::BoxOnTarget
            } else {
                Cell::Box
            };
            grid.with_cell(cell, content)
        }
        EditorTool::Player => {
            let content = if current.has_target() {
                Cell::PlayerOnTarget
            } else {
                Cell::Player
            };
            clear_player(grid).with_cell(cell, content)
        }
        EditorTool::Target => {
            let content = match current {
                Cell::Box | Cell::BoxOnTarget => Cell::BoxOnTarget,
                Cell::Player | Cell::PlayerOnTarget => Cell::PlayerOnTarget,
                Cell::Floor | Cell::Wall | Cell::Target => Cell::Target,
            };
            grid.with_cell(cell, content)
        }
    }
}

/// Validates a canvas for play and serialises it into level rows.
///
/// A playable level has exactly one player-bearing cell, at least one box,
/// and as many box-capable cells as target-bearing cells. The returned rows
/// are ready for appending to the level catalog.
pub fn validate(grid: &Grid) -> Result<Vec<String>, LevelError> {
    let mut players = 0u32;
    let mut boxes = 0u32;
    let mut targets = 0u32;

    for content in grid.iter() {
        if content.has_player() {
            players += 1;
        }
        if content.has_box() {
            boxes += 1;
        }
        if content.has_target() {
            targets += 1;
        }
    }

    if players != 1 {
        return Err(LevelError::PlayerCount { players });
    }
    if boxes == 0 {
        return Err(LevelError::NoBoxes);
    }
    if boxes != targets {
        return Err(LevelError::CountMismatch { boxes, targets });
    }

    Ok(grid.to_rows())
}

/// Reverts every player-bearing cell, preserving goal slots underneath.
fn clear_player(grid: &Grid) -> Grid {
    grid.map_cells(|content| match content {
        Cell::Player => Cell::Floor,
        Cell::PlayerOnTarget => Cell::Target,
        other => other,
    })
}
