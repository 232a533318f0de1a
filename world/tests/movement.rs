use warehouse_core::{Cell, CellCoord, Direction, MoveRejection};
use warehouse_world::{resolve, Grid};

fn parse(rows: &[&str]) -> (Grid, CellCoord) {
    let rows: Vec<String> = rows.iter().map(|row| (*row).to_owned()).collect();
    Grid::parse(&rows).expect("test level parses")
}

fn differing_cells(before: &Grid, after: &Grid) -> Vec<CellCoord> {
    let mut cells = Vec::new();
    for row in 0..before.rows() {
        for column in 0..before.columns() {
            let coord = CellCoord::new(column, row);
            if before.cell(coord) != after.cell(coord) {
                cells.push(coord);
            }
        }
    }
    cells
}

#[test]
fn winning_push_resolves_the_reference_scenario() {
    let (grid, player) = parse(&["#####", "#@$.#", "#####"]);
    assert_eq!(player, CellCoord::new(1, 1));

    let outcome = resolve(&grid, player, Direction::Right).expect("push is legal");

    assert!(outcome.pushed);
    assert_eq!(outcome.player, CellCoord::new(2, 1));
    assert_eq!(outcome.grid.cell(CellCoord::new(1, 1)), Some(Cell::Floor));
    assert_eq!(outcome.grid.cell(CellCoord::new(2, 1)), Some(Cell::Player));
    assert_eq!(
        outcome.grid.cell(CellCoord::new(3, 1)),
        Some(Cell::BoxOnTarget)
    );
    assert!(outcome.grid.is_solved());
}

#[test]
fn plain_step_changes_only_the_player_cells() {
    let (grid, player) = parse(&["#####", "#@  #", "#####"]);

    let outcome = resolve(&grid, player, Direction::Right).expect("step is legal");

    assert!(!outcome.pushed);
    assert_eq!(
        differing_cells(&grid, &outcome.grid),
        vec![CellCoord::new(1, 1), CellCoord::new(2, 1)],
        "a plain step must touch exactly the vacated and entered cells",
    );
}

#[test]
fn push_changes_at_most_three_cells() {
    let (grid, player) = parse(&["#####", "#@$ #", "#####"]);

    let outcome = resolve(&grid, player, Direction::Right).expect("push is legal");

    assert!(outcome.pushed);
    assert_eq!(
        differing_cells(&grid, &outcome.grid),
        vec![
            CellCoord::new(1, 1),
            CellCoord::new(2, 1),
            CellCoord::new(3, 1)
        ],
        "a push must touch exactly the player cells and the box destination",
    );
}

#[test]
fn stepping_onto_a_target_preserves_its_goal_slot() {
    let (grid, player) = parse(&["#@.$#"]);

    let onto = resolve(&grid, player, Direction::Right).expect("step onto target");
    assert_eq!(
        onto.grid.cell(CellCoord::new(2, 0)),
        Some(Cell::PlayerOnTarget)
    );

    let away = resolve(&onto.grid, onto.player, Direction::Left).expect("step back off");
    assert_eq!(
        away.grid.cell(CellCoord::new(2, 0)),
        Some(Cell::Target),
        "vacating a goal slot must restore the bare target",
    );
}

#[test]
fn vacating_a_plain_cell_restores_floor() {
    let (grid, player) = parse(&["#@ .#"]);

    let outcome = resolve(&grid, player, Direction::Right).expect("step is legal");
    assert_eq!(outcome.grid.cell(CellCoord::new(1, 0)), Some(Cell::Floor));
}

#[test]
fn moving_into_a_wall_is_rejected() {
    let (grid, player) = parse(&["###", "#@#", "###"]);

    for direction in [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ] {
        assert_eq!(
            resolve(&grid, player, direction),
            Err(MoveRejection::BlockedByWall)
        );
    }
}

#[test]
fn moving_off_the_grid_is_rejected() {
    let (grid, player) = parse(&["@"]);

    for direction in [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ] {
        assert_eq!(
            resolve(&grid, player, direction),
            Err(MoveRejection::OutOfBounds)
        );
    }
}

#[test]
fn pushing_a_box_into_a_wall_is_rejected() {
    let (grid, player) = parse(&["#@$#"]);

    assert_eq!(
        resolve(&grid, player, Direction::Right),
        Err(MoveRejection::BlockedByWall)
    );
}

#[test]
fn pushing_a_box_into_another_box_is_rejected() {
    let (grid, player) = parse(&["#@$$ #"]);

    assert_eq!(
        resolve(&grid, player, Direction::Right),
        Err(MoveRejection::BlockedByBox)
    );
}

#[test]
fn pushing_a_box_into_a_settled_box_is_rejected() {
    let (grid, player) = parse(&["#@$* #"]);

    assert_eq!(
        resolve(&grid, player, Direction::Right),
        Err(MoveRejection::BlockedByBox)
    );
}

#[test]
fn pushing_a_box_off_the_grid_is_rejected() {
    let (grid, player) = parse(&["@$"]);

    assert_eq!(
        resolve(&grid, player, Direction::Right),
        Err(MoveRejection::OutOfBounds)
    );
}

#[test]
fn rejected_moves_never_touch_the_grid() {
    let (grid, player) = parse(&["#@$#"]);
    let pristine = grid.clone();

    let result = resolve(&grid, player, Direction::Right);

    assert!(result.is_err());
    assert_eq!(grid, pristine, "rejected pushes must not move the box");
}

#[test]
fn pushing_a_settled_box_off_its_goal_slot_restores_the_slot() {
    let (grid, player) = parse(&["#@* #"]);

    let outcome = resolve(&grid, player, Direction::Right).expect("push is legal");

    assert!(outcome.pushed);
    assert_eq!(
        outcome.grid.cell(CellCoord::new(2, 0)),
        Some(Cell::PlayerOnTarget),
        "the player inherits the goal slot the box vacated",
    );
    assert_eq!(outcome.grid.cell(CellCoord::new(3, 0)), Some(Cell::Box));
    assert!(!outcome.grid.is_solved());
}
