#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Warehouse engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to the Warehouse.";

/// Describes the active mode of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayMode {
    /// Standard play mode where the player pushes boxes onto targets.
    Play,
    /// Editor mode that suspends play to enable level authoring.
    Edit,
}

/// Contents of a single grid cell.
///
/// `BoxOnTarget` and `PlayerOnTarget` are composite states: the cell keeps
/// its target-ness when the occupant vacates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty walkable floor.
    Floor,
    /// Impassable wall.
    Wall,
    /// A box resting on plain floor.
    Box,
    /// An unoccupied goal slot.
    Target,
    /// A box resting on a goal slot.
    BoxOnTarget,
    /// The player standing on plain floor.
    Player,
    /// The player standing on a goal slot.
    PlayerOnTarget,
}

impl Cell {
    /// Converts a level-format character into its cell variant.
    #[must_use]
    pub const fn from_char(character: char) -> Option<Self> {
        match character {
            ' ' => Some(Self::Floor),
            '#' => Some(Self::Wall),
            '$' => Some(Self::Box),
            '.' => Some(Self::Target),
            '*' => Some(Self::BoxOnTarget),
            '@' => Some(Self::Player),
            '+' => Some(Self::PlayerOnTarget),
            _ => None,
        }
    }

    /// Converts the cell variant into its level-format character.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Floor => ' ',
            Self::Wall => '#',
            Self::Box => '$',
            Self::Target => '.',
            Self::BoxOnTarget => '*',
            Self::Player => '@',
            Self::PlayerOnTarget => '+',
        }
    }

    /// Reports whether the cell carries a goal slot underneath its occupant.
    #[must_use]
    pub const fn has_target(self) -> bool {
        matches!(self, Self::Target | Self::BoxOnTarget | Self::PlayerOnTarget)
    }

    /// Reports whether the cell is occupied by a box.
    #[must_use]
    pub const fn has_box(self) -> bool {
        matches!(self, Self::Box | Self::BoxOnTarget)
    }

    /// Reports whether the cell is occupied by the player.
    #[must_use]
    pub const fn has_player(self) -> bool {
        matches!(self, Self::Player | Self::PlayerOnTarget)
    }
}

/// Cardinal movement directions available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Editing tools available while the session is in edit mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorTool {
    /// Places an impassable wall.
    Wall,
    /// Places the player, displacing any previous player cell.
    Player,
    /// Places a box, composing with goal slots into `BoxOnTarget`.
    Box,
    /// Marks a goal slot, composing with any occupant.
    Target,
    /// Clears the cell back to plain floor.
    Erase,
}

/// A named level expressed in the textual row format.
///
/// Each row is a string of single characters as defined by
/// [`Cell::from_char`]; the format round-trips exactly through
/// serialisation and parsing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    name: String,
    rows: Vec<String>,
}

impl Level {
    /// Creates a new level from its display name and textual rows.
    #[must_use]
    pub fn new(name: String, rows: Vec<String>) -> Self {
        Self { name, rows }
    }

    /// Display name of the level.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Textual rows composing the level.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

/// Reasons the world may reject a requested player move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRejection {
    /// The destination cell, or the cell a pushed box would enter, lies
    /// outside the grid.
    OutOfBounds,
    /// The destination cell is a wall, or the pushed box would enter one.
    BlockedByWall,
    /// The pushed box would collide with another box.
    BlockedByBox,
    /// The level is already complete; the session is frozen until undo,
    /// reset, or a level change.
    LevelComplete,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "the move would leave the grid"),
            Self::BlockedByWall => write!(f, "the move is blocked by a wall"),
            Self::BlockedByBox => write!(f, "the box cannot be pushed into another box"),
            Self::LevelComplete => write!(f, "the level is already complete"),
        }
    }
}

/// Reasons a textual level cannot be converted into a playable grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelParseError {
    /// The level contains no player-bearing cell.
    MissingPlayer,
    /// The level contains more than one player-bearing cell.
    MultiplePlayers,
    /// A row's width differs from the width of the first row.
    RaggedRows {
        /// Width of the first row, which every row must match.
        expected: usize,
        /// Width of the offending row.
        found: usize,
        /// Zero-based index of the offending row.
        row: usize,
    },
    /// A character does not map to any cell variant.
    UnknownCell {
        /// The unrecognised character.
        character: char,
        /// Zero-based column of the character.
        column: usize,
        /// Zero-based row of the character.
        row: usize,
    },
}

impl fmt::Display for LevelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPlayer => write!(f, "level does not contain a player"),
            Self::MultiplePlayers => write!(f, "level contains more than one player"),
            Self::RaggedRows {
                expected,
                found,
                row,
            } => write!(
                f,
                "row {row} is {found} cells wide but the level is {expected} cells wide"
            ),
            Self::UnknownCell {
                character,
                column,
                row,
            } => write!(f, "unknown cell character '{character}' at ({column}, {row})"),
        }
    }
}

impl std::error::Error for LevelParseError {}

/// Structured reasons a level fails save-time validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelError {
    /// The grid must contain exactly one player-bearing cell.
    PlayerCount {
        /// Number of player-bearing cells found.
        players: u32,
    },
    /// The grid contains no box-capable cell.
    NoBoxes,
    /// Box and target counts differ, so the level can never be solved.
    CountMismatch {
        /// Number of box-capable cells found.
        boxes: u32,
        /// Number of target-bearing cells found.
        targets: u32,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerCount { players } => {
                write!(f, "level must have exactly one player (found {players})")
            }
            Self::NoBoxes => write!(f, "level must have at least one box"),
            Self::CountMismatch { boxes, targets } => {
                write!(f, "level has {boxes} boxes and {targets} targets")
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Loads the catalog level at the provided index, replacing the live
    /// session and clearing the undo history.
    LoadLevel {
        /// Zero-based index into the level catalog.
        index: usize,
    },
    /// Requests a single player step in the provided direction.
    Move {
        /// Direction of travel for the attempted step.
        direction: Direction,
    },
    /// Restores the most recent session snapshot, if any exists.
    Undo,
    /// Reloads the current level, discarding session progress and history.
    Reset,
    /// Requests that the session transition to the provided mode.
    SetPlayMode {
        /// Mode the session should activate.
        mode: PlayMode,
    },
    /// Activates the provided editor tool for subsequent placements.
    SelectTool {
        /// Tool to activate.
        tool: EditorTool,
    },
    /// Applies the active editor tool to a cell of the editor canvas.
    ApplyTool {
        /// Canvas cell the tool is applied to.
        cell: CellCoord,
    },
    /// Validates the editor canvas and, on success, appends it to the level
    /// catalog and switches back to play mode on the new level.
    SaveLevel {
        /// Display name recorded for the new level.
        name: String,
    },
    /// Appends a previously saved custom level to the catalog without
    /// touching the live session.
    InstallLevel {
        /// The level to install.
        level: Level,
    },
    /// Resizes the undo history, evicting the oldest snapshots if the new
    /// depth is smaller than the current length.
    ConfigureUndoDepth {
        /// Maximum number of snapshots retained for undo.
        depth: usize,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Confirms that a catalog level became the live session.
    LevelLoaded {
        /// Zero-based index of the loaded level.
        index: usize,
        /// Number of columns in the loaded grid.
        columns: u32,
        /// Number of rows in the loaded grid.
        rows: u32,
    },
    /// Confirms that the player moved between two cells.
    PlayerMoved {
        /// Cell the player occupied before moving.
        from: CellCoord,
        /// Cell the player occupies after the move.
        to: CellCoord,
        /// Indicates whether the move displaced a box.
        pushed: bool,
    },
    /// Reports that a move request was rejected without mutating state.
    MoveRejected {
        /// Direction of the rejected move.
        direction: Direction,
        /// Specific reason the move failed.
        reason: MoveRejection,
    },
    /// Announces that every box rests on a goal slot.
    LevelCompleted {
        /// Number of accepted moves it took to solve the level.
        moves: u32,
    },
    /// Confirms that the session was rewound to its previous snapshot.
    MoveUndone {
        /// Move count restored by the rewind.
        moves: u32,
        /// Completion flag restored by the rewind.
        completed: bool,
    },
    /// Announces that the session entered a new mode.
    PlayModeChanged {
        /// Mode that became active after processing commands.
        mode: PlayMode,
    },
    /// Confirms that an editor tool became active.
    ToolSelected {
        /// Tool that became active.
        tool: EditorTool,
    },
    /// Confirms that the editor canvas was mutated.
    CellEdited {
        /// Canvas cell that was written.
        cell: CellCoord,
        /// Content of the cell after the edit.
        content: Cell,
    },
    /// Confirms that the editor canvas was appended to the level catalog.
    LevelSaved {
        /// Zero-based catalog index assigned to the new level.
        index: usize,
        /// The serialised level, ready for persistence.
        level: Level,
    },
    /// Confirms that a custom level was appended to the catalog.
    LevelInstalled {
        /// Zero-based catalog index assigned to the level.
        index: usize,
    },
    /// Reports that a level failed save-time validation.
    LevelRejected {
        /// Specific reason the level is not playable.
        reason: LevelError,
    },
    /// Reports that a textual level could not be parsed at all.
    LevelMalformed {
        /// Specific reason the level text is malformed.
        reason: LevelParseError,
    },
}
