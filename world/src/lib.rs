#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state management for the Warehouse engine.
//!
//! The [`World`] owns every piece of mutable state: the live play session,
//! the undo history, the editor canvas, and the level catalog. Adapters and
//! systems never mutate state directly — they submit [`Command`] values to
//! [`apply`], which executes them synchronously and broadcasts [`Event`]
//! values describing what actually happened.

mod editor;
mod grid;
mod history;
mod levels;
mod movement;

pub use editor::{apply_tool, validate};
pub use grid::Grid;
pub use history::{Snapshot, UndoHistory};
pub use movement::{resolve, MoveOutcome};

use warehouse_core::{
    Cell, CellCoord, Command, Direction, EditorTool, Event, Level, MoveRejection, PlayMode,
    WELCOME_BANNER,
};

use history::DEFAULT_UNDO_DEPTH;

const EDITOR_COLUMNS: u32 = 10;
const EDITOR_ROWS: u32 = 8;

/// Live play state, replaced wholesale on every accepted move and undo.
#[derive(Clone, Debug)]
struct Session {
    grid: Grid,
    player: CellCoord,
    move_count: u32,
    completed: bool,
}

/// Represents the authoritative Warehouse session state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    mode: PlayMode,
    catalog: Vec<Level>,
    current_level: usize,
    session: Session,
    history: UndoHistory,
    editor_grid: Grid,
    active_tool: EditorTool,
}

impl World {
    /// Creates a new session with the first built-in level loaded.
    #[must_use]
    pub fn new() -> Self {
        let catalog = levels::built_in_levels();
        let first = catalog
            .first()
            .expect("built-in level catalog is never empty");
        let (grid, player) =
            Grid::parse(first.rows()).expect("built-in levels are well-formed");
        Self {
            banner: WELCOME_BANNER,
            mode: PlayMode::Play,
            catalog,
            current_level: 0,
            session: Session {
                grid,
                player,
                move_count: 0,
                completed: false,
            },
            history: UndoHistory::new(DEFAULT_UNDO_DEPTH),
            editor_grid: Grid::filled(EDITOR_COLUMNS, EDITOR_ROWS, Cell::Floor),
            active_tool: EditorTool::Wall,
        }
    }

    fn load_level(&mut self, index: usize, out_events: &mut Vec<Event>) {
        let Some(level) = self.catalog.get(index) else {
            return;
        };
        match Grid::parse(level.rows()) {
            Ok((grid, player)) => {
                self.current_level = index;
                self.session = Session {
                    grid,
                    player,
                    move_count: 0,
                    completed: false,
                };
                self.history.clear();
                out_events.push(Event::LevelLoaded {
                    index,
                    columns: self.session.grid.columns(),
                    rows: self.session.grid.rows(),
                });
            }
            Err(reason) => out_events.push(Event::LevelMalformed { reason }),
        }
    }

    fn resolve_move(&mut self, direction: Direction, out_events: &mut Vec<Event>) {
        if self.session.completed {
            out_events.push(Event::MoveRejected {
                direction,
                reason: MoveRejection::LevelComplete,
            });
            return;
        }

        match movement::resolve(&self.session.grid, self.session.player, direction) {
            Ok(outcome) => {
                self.history.push(Snapshot {
                    grid: self.session.grid.clone(),
                    player: self.session.player,
                    move_count: self.session.move_count,
                    completed: self.session.completed,
                });

                let from = self.session.player;
                self.session.grid = outcome.grid;
                self.session.player = outcome.player;
                self.session.move_count = self.session.move_count.saturating_add(1);
                out_events.push(Event::PlayerMoved {
                    from,
                    to: outcome.player,
                    pushed: outcome.pushed,
                });

                if self.session.grid.is_solved() {
                    self.session.completed = true;
                    out_events.push(Event::LevelCompleted {
                        moves: self.session.move_count,
                    });
                }
            }
            Err(reason) => out_events.push(Event::MoveRejected { direction, reason }),
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Every accepted command fully completes — snapshot captured, win check
/// run, events emitted — before the function returns; there is no partial
/// state for callers to observe.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::LoadLevel { index } => world.load_level(index, out_events),
        Command::Reset => world.load_level(world.current_level, out_events),
        Command::Move { direction } => {
            if world.mode != PlayMode::Play {
                return;
            }
            world.resolve_move(direction, out_events);
        }
        Command::Undo => {
            if let Some(snapshot) = world.history.pop() {
                world.session = Session {
                    grid: snapshot.grid,
                    player: snapshot.player,
                    move_count: snapshot.move_count,
                    completed: snapshot.completed,
                };
                out_events.push(Event::MoveUndone {
                    moves: world.session.move_count,
                    completed: world.session.completed,
                });
            }
        }
        Command::SetPlayMode { mode } => {
            if world.mode != mode {
                world.mode = mode;
                out_events.push(Event::PlayModeChanged { mode });
            }
        }
        Command::SelectTool { tool } => {
            if world.active_tool != tool {
                world.active_tool = tool;
                out_events.push(Event::ToolSelected { tool });
            }
        }
        Command::ApplyTool { cell } => {
            if world.mode != PlayMode::Edit {
                return;
            }
            world.editor_grid = editor::apply_tool(&world.editor_grid, cell, world.active_tool);
            if let Some(content) = world.editor_grid.cell(cell) {
                out_events.push(Event::CellEdited { cell, content });
            }
        }
        Command::SaveLevel { name } => {
            if world.mode != PlayMode::Edit {
                return;
            }
            match editor::validate(&world.editor_grid) {
                Ok(rows) => {
                    let level = Level::new(name, rows);
                    world.catalog.push(level.clone());
                    let index = world.catalog.len() - 1;
                    out_events.push(Event::LevelSaved { index, level });
                    world.mode = PlayMode::Play;
                    out_events.push(Event::PlayModeChanged {
                        mode: PlayMode::Play,
                    });
                    world.load_level(index, out_events);
                }
                Err(reason) => out_events.push(Event::LevelRejected { reason }),
            }
        }
        Command::InstallLevel { level } => match Grid::parse(level.rows()) {
            Ok((grid, _player)) => match editor::validate(&grid) {
                Ok(_) => {
                    world.catalog.push(level);
                    out_events.push(Event::LevelInstalled {
                        index: world.catalog.len() - 1,
                    });
                }
                Err(reason) => out_events.push(Event::LevelRejected { reason }),
            },
            Err(reason) => out_events.push(Event::LevelMalformed { reason }),
        },
        Command::ConfigureUndoDepth { depth } => world.history.set_capacity(depth),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::{Grid, World};
    use warehouse_core::{CellCoord, EditorTool, PlayMode};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Reports the session's active mode.
    #[must_use]
    pub fn play_mode(world: &World) -> PlayMode {
        world.mode
    }

    /// Captures a snapshot of the grid backing the active mode.
    ///
    /// In play mode this is the live session grid; in edit mode it is the
    /// editor canvas. The returned value is a copy — mutating the world
    /// afterwards never invalidates it.
    #[must_use]
    pub fn grid_view(world: &World) -> Grid {
        match world.mode {
            PlayMode::Play => world.session.grid.clone(),
            PlayMode::Edit => world.editor_grid.clone(),
        }
    }

    /// Cell currently occupied by the player in the live session.
    #[must_use]
    pub fn player(world: &World) -> CellCoord {
        world.session.player
    }

    /// Number of accepted moves since the level was loaded.
    #[must_use]
    pub fn move_count(world: &World) -> u32 {
        world.session.move_count
    }

    /// Reports whether every box in the live session rests on a goal slot.
    #[must_use]
    pub fn is_completed(world: &World) -> bool {
        world.session.completed
    }

    /// Editor tool applied by subsequent `ApplyTool` commands.
    #[must_use]
    pub fn active_tool(world: &World) -> EditorTool {
        world.active_tool
    }

    /// Zero-based catalog index of the level backing the live session.
    #[must_use]
    pub fn current_level(world: &World) -> usize {
        world.current_level
    }

    /// Total number of levels in the catalog, built-ins included.
    #[must_use]
    pub fn level_count(world: &World) -> usize {
        world.catalog.len()
    }

    /// Display name of the catalog level at the provided index.
    #[must_use]
    pub fn level_name(world: &World, index: usize) -> Option<&str> {
        world.catalog.get(index).map(warehouse_core::Level::name)
    }

    /// Textual rows of the catalog level at the provided index.
    #[must_use]
    pub fn level_rows(world: &World, index: usize) -> Option<&[String]> {
        world.catalog.get(index).map(warehouse_core::Level::rows)
    }

    /// Number of snapshots currently available for undo.
    #[must_use]
    pub fn undo_depth(world: &World) -> usize {
        world.history.len()
    }
}
