use warehouse_core::{Cell, CellCoord, EditorTool, LevelError};
use warehouse_world::{apply_tool, validate, Grid};

fn canvas() -> Grid {
    Grid::filled(5, 4, Cell::Floor)
}

fn cell_count(grid: &Grid, content: Cell) -> usize {
    grid.iter().filter(|cell| *cell == content).count()
}

#[test]
fn box_tool_composes_with_goal_slots() {
    let grid = canvas();
    let slot = CellCoord::new(1, 1);

    let with_target = apply_tool(&grid, slot, EditorTool::Target);
    let with_box = apply_tool(&with_target, slot, EditorTool::Box);

    assert_eq!(with_box.cell(slot), Some(Cell::BoxOnTarget));
}

#[test]
fn box_tool_on_plain_floor_places_a_plain_box() {
    let grid = apply_tool(&canvas(), CellCoord::new(2, 2), EditorTool::Box);
    assert_eq!(grid.cell(CellCoord::new(2, 2)), Some(Cell::Box));
}

#[test]
fn target_tool_composes_with_occupants() {
    let grid = canvas();
    let slot = CellCoord::new(1, 1);

    let boxed = apply_tool(&grid, slot, EditorTool::Box);
    assert_eq!(
        apply_tool(&boxed, slot, EditorTool::Target).cell(slot),
        Some(Cell::BoxOnTarget)
    );

    let manned = apply_tool(&grid, slot, EditorTool::Player);
    assert_eq!(
        apply_tool(&manned, slot, EditorTool::Target).cell(slot),
        Some(Cell::PlayerOnTarget)
    );
}

#[test]
fn target_tool_is_idempotent() {
    let grid = canvas();
    let slot = CellCoord::new(3, 2);

    let once = apply_tool(&grid, slot, EditorTool::Target);
    let twice = apply_tool(&once, slot, EditorTool::Target);

    assert_eq!(once.cell(slot), Some(Cell::Target));
    assert_eq!(
        twice.cell(slot),
        Some(Cell::Target),
        "re-applying the target tool must not toggle the goal slot away",
    );
}

#[test]
fn target_tool_overwrites_walls() {
    let grid = apply_tool(&canvas(), CellCoord::new(0, 0), EditorTool::Wall);
    let slotted = apply_tool(&grid, CellCoord::new(0, 0), EditorTool::Target);
    assert_eq!(slotted.cell(CellCoord::new(0, 0)), Some(Cell::Target));
}

#[test]
fn erase_tool_discards_every_layer() {
    let grid = canvas();
    let slot = CellCoord::new(1, 1);

    let stacked = apply_tool(&apply_tool(&grid, slot, EditorTool::Target), slot, EditorTool::Box);
    assert_eq!(stacked.cell(slot), Some(Cell::BoxOnTarget));

    let erased = apply_tool(&stacked, slot, EditorTool::Erase);
    assert_eq!(
        erased.cell(slot),
        Some(Cell::Floor),
        "erase must drop the goal slot together with the box",
    );
}

#[test]
fn placing_the_player_twice_leaves_a_single_player() {
    let grid = canvas();

    let first = apply_tool(&grid, CellCoord::new(1, 1), EditorTool::Player);
    let second = apply_tool(&first, CellCoord::new(3, 3), EditorTool::Player);

    assert_eq!(second.cell(CellCoord::new(1, 1)), Some(Cell::Floor));
    assert_eq!(second.cell(CellCoord::new(3, 3)), Some(Cell::Player));
    assert_eq!(
        cell_count(&second, Cell::Player) + cell_count(&second, Cell::PlayerOnTarget),
        1
    );
}

#[test]
fn displaced_player_restores_the_goal_slot_underneath() {
    let grid = canvas();
    let slot = CellCoord::new(2, 2);

    let slotted = apply_tool(&grid, slot, EditorTool::Target);
    let manned = apply_tool(&slotted, slot, EditorTool::Player);
    assert_eq!(manned.cell(slot), Some(Cell::PlayerOnTarget));

    let moved = apply_tool(&manned, CellCoord::new(0, 0), EditorTool::Player);
    assert_eq!(
        moved.cell(slot),
        Some(Cell::Target),
        "displacing the player must leave the goal slot behind",
    );
    assert_eq!(moved.cell(CellCoord::new(0, 0)), Some(Cell::Player));
}

#[test]
fn tools_ignore_out_of_bounds_coordinates() {
    let grid = canvas();
    let unchanged = apply_tool(&grid, CellCoord::new(40, 40), EditorTool::Wall);
    assert_eq!(unchanged, grid);
}

#[test]
fn validation_requires_exactly_one_player() {
    let grid = canvas();
    assert_eq!(
        validate(&grid),
        Err(LevelError::PlayerCount { players: 0 })
    );

    // Two players can only be produced outside the editor tools, but the
    // validator still reports them.
    let crowded = Grid::filled(3, 1, Cell::Floor)
        .with_cell(CellCoord::new(0, 0), Cell::Player)
        .with_cell(CellCoord::new(2, 0), Cell::Player);
    assert_eq!(
        validate(&crowded),
        Err(LevelError::PlayerCount { players: 2 })
    );
}

#[test]
fn validation_requires_at_least_one_box() {
    let grid = apply_tool(&canvas(), CellCoord::new(1, 1), EditorTool::Player);
    assert_eq!(validate(&grid), Err(LevelError::NoBoxes));
}

#[test]
fn validation_reports_both_mismatched_counts() {
    let mut grid = apply_tool(&canvas(), CellCoord::new(0, 0), EditorTool::Player);
    grid = apply_tool(&grid, CellCoord::new(1, 0), EditorTool::Box);
    grid = apply_tool(&grid, CellCoord::new(2, 0), EditorTool::Box);
    grid = apply_tool(&grid, CellCoord::new(3, 0), EditorTool::Target);

    assert_eq!(
        validate(&grid),
        Err(LevelError::CountMismatch {
            boxes: 2,
            targets: 1,
        })
    );
}

#[test]
fn settled_boxes_satisfy_both_counts() {
    let mut grid = apply_tool(&canvas(), CellCoord::new(0, 0), EditorTool::Player);
    grid = apply_tool(&grid, CellCoord::new(1, 0), EditorTool::Target);
    grid = apply_tool(&grid, CellCoord::new(1, 0), EditorTool::Box);

    assert_eq!(grid.cell(CellCoord::new(1, 0)), Some(Cell::BoxOnTarget));
    let rows = validate(&grid).expect("a settled box counts as box and target");
    assert_eq!(rows.len(), 4);
}

#[test]
fn valid_canvases_serialise_to_parseable_rows() {
    let mut grid = apply_tool(&canvas(), CellCoord::new(0, 0), EditorTool::Player);
    grid = apply_tool(&grid, CellCoord::new(1, 0), EditorTool::Box);
    grid = apply_tool(&grid, CellCoord::new(2, 0), EditorTool::Box);
    grid = apply_tool(&grid, CellCoord::new(1, 1), EditorTool::Target);
    grid = apply_tool(&grid, CellCoord::new(2, 1), EditorTool::Target);

    let rows = validate(&grid).expect("canvas is a playable level");
    let (parsed, player) = Grid::parse(&rows).expect("serialised rows parse back");
    assert_eq!(parsed, grid);
    assert_eq!(player, CellCoord::new(0, 0));
}
