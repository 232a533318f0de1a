#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Terminal adapter that drives the Warehouse engine.
//!
//! The adapter owns everything the engine deliberately does not: argument
//! parsing, configuration, rendering the grid as text, translating line
//! input into commands, persisting user-created levels, and dropping sound
//! cues into the log. The engine sees nothing but [`Command`] values.

mod config;
mod level_store;
mod level_transfer;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use warehouse_core::{
    CellCoord, Command, Direction, EditorTool, Event, Level, PlayMode,
};
use warehouse_system_editor::{Editor, EditorInput};
use warehouse_system_sound::Sound;
use warehouse_world::{self as world, query, World};

use crate::config::Config;
use crate::level_store::LevelStore;
use crate::level_transfer::LevelTransfer;

/// Command-line arguments accepted by the warehouse binary.
#[derive(Debug, Parser)]
#[command(
    name = "warehouse",
    about = "Box-pushing warehouse puzzles in the terminal"
)]
struct Args {
    /// Path of the optional TOML configuration file.
    #[arg(long, default_value = "warehouse.toml")]
    config: PathBuf,

    #[command(subcommand)]
    action: Option<Action>,
}

/// Subcommands exposed by the adapter.
#[derive(Debug, Subcommand)]
enum Action {
    /// Starts the interactive session (the default action).
    Play {
        /// Zero-based index of the level to start on.
        #[arg(long, default_value_t = 0)]
        level: usize,
    },
    /// Lists every level in the catalog.
    Levels,
    /// Prints a shareable transfer string for a catalog level.
    Export {
        /// Zero-based index of the level to export.
        #[arg(long)]
        level: usize,
    },
    /// Imports a level from a transfer string and persists it.
    Import {
        /// Transfer string produced by `export`.
        transfer: String,
    },
}

/// Entry point for the Warehouse command-line interface.
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Config::load(&args.config)?;
    let store = LevelStore::new(config.levels_path.clone());

    let mut world = World::new();
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::ConfigureUndoDepth {
            depth: config.undo_depth,
        },
        &mut events,
    );
    install_custom_levels(&mut world, &store)?;

    match args.action.unwrap_or(Action::Play { level: 0 }) {
        Action::Play { level } => play(world, &store, level),
        Action::Levels => {
            list_levels(&world);
            Ok(())
        }
        Action::Export { level } => export_level(&world, level),
        Action::Import { transfer } => import_level(world, &store, &transfer),
    }
}

/// Replays the persisted custom levels into the catalog.
fn install_custom_levels(world: &mut World, store: &LevelStore) -> Result<()> {
    let levels = store.load().context("failed to load the custom level store")?;
    let mut events = Vec::new();
    for level in levels {
        let name = level.name().to_owned();
        world::apply(world, Command::InstallLevel { level }, &mut events);
        match events.last() {
            Some(Event::LevelInstalled { index }) => {
                info!("installed custom level '{name}' as #{index}");
            }
            Some(Event::LevelRejected { reason }) => {
                warn!("skipping custom level '{name}': {reason}");
            }
            Some(Event::LevelMalformed { reason }) => {
                warn!("skipping custom level '{name}': {reason}");
            }
            _ => {}
        }
        events.clear();
    }
    Ok(())
}

/// Runs the interactive line-oriented session.
fn play(mut world: World, store: &LevelStore, level: usize) -> Result<()> {
    let mut events = Vec::new();
    if level != 0 {
        world::apply(&mut world, Command::LoadLevel { index: level }, &mut events);
        if events.is_empty() {
            bail!("no level #{level} exists in the catalog");
        }
        events.clear();
    }

    let mut editor = Editor::new();
    let sound = Sound::new();

    println!("{}", query::welcome_banner(&world));
    print_help();
    render(&world);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;

        let mut commands: Vec<Command> = Vec::new();
        let mut editor_input = EditorInput::default();
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            ["q"] | ["quit"] => break,
            ["h"] | ["help"] => print_help(),
            ["u"] => commands.push(Command::Move {
                direction: Direction::Up,
            }),
            ["d"] => commands.push(Command::Move {
                direction: Direction::Down,
            }),
            ["l"] => commands.push(Command::Move {
                direction: Direction::Left,
            }),
            ["r"] => commands.push(Command::Move {
                direction: Direction::Right,
            }),
            ["z"] => commands.push(Command::Undo),
            ["p"] => commands.push(Command::Reset),
            ["g", index] => match index.parse::<usize>() {
                Ok(index) => commands.push(Command::LoadLevel { index }),
                Err(_) => println!("usage: g <level>"),
            },
            ["e"] => {
                let mode = match query::play_mode(&world) {
                    PlayMode::Play => PlayMode::Edit,
                    PlayMode::Edit => PlayMode::Play,
                };
                commands.push(Command::SetPlayMode { mode });
            }
            ["t", tool] => match parse_tool(tool) {
                Some(tool) => editor_input.requested_tool = Some(tool),
                None => println!("tools: wall, player, box, target, erase"),
            },
            ["a", column, row] => match (column.parse::<u32>(), row.parse::<u32>()) {
                (Ok(column), Ok(row)) => {
                    editor_input.apply_action = true;
                    editor_input.cursor_cell = Some(CellCoord::new(column, row));
                }
                _ => println!("usage: a <column> <row>"),
            },
            ["s", name @ ..] if !name.is_empty() => {
                editor_input.save_request = Some(name.join(" "));
            }
            _ => println!("unknown command (h for help)"),
        }

        editor.handle(&events, editor_input, &mut commands);
        events.clear();
        for command in commands {
            world::apply(&mut world, command, &mut events);
        }

        play_cues(&sound, &events);
        persist_saved_levels(store, &events);
        report(&events);
        render(&world);
    }

    Ok(())
}

/// Forwards sound cues to the log; a terminal has no audio device.
fn play_cues(sound: &Sound, events: &[Event]) {
    let mut cues = Vec::new();
    sound.handle(events, &mut cues);
    for cue in cues {
        info!("sound cue: {cue:?}");
    }
}

/// Persists levels saved from the editor, without blocking the session.
fn persist_saved_levels(store: &LevelStore, events: &[Event]) {
    for event in events {
        if let Event::LevelSaved { level, .. } = event {
            if let Err(error) = store.append(level.clone()) {
                warn!("could not persist level '{}': {error}", level.name());
            }
        }
    }
}

/// Prints user-facing messages derived from the event batch.
fn report(events: &[Event]) {
    for event in events {
        match event {
            Event::MoveRejected { reason, .. } => println!("({reason})"),
            Event::LevelCompleted { moves } => println!("Solved in {moves} moves!"),
            Event::MoveUndone { moves, .. } => println!("(rewound to move {moves})"),
            Event::LevelRejected { reason } => println!("cannot save: {reason}"),
            Event::LevelSaved { index, level } => {
                println!("saved '{}' as level #{index}", level.name());
            }
            _ => {}
        }
    }
}

/// Renders the active grid and a one-line status footer.
fn render(world: &World) {
    let grid = query::grid_view(world);
    for row in grid.to_rows() {
        println!("{row}");
    }
    match query::play_mode(world) {
        PlayMode::Play => {
            let index = query::current_level(world);
            let name = query::level_name(world, index).unwrap_or("?");
            let status = if query::is_completed(world) {
                " (solved)"
            } else {
                ""
            };
            println!(
                "[{index}] {name} | moves: {}{status}",
                query::move_count(world)
            );
        }
        PlayMode::Edit => {
            println!("editing | tool: {:?}", query::active_tool(world));
        }
    }
}

/// Lists the catalog with indices, names and dimensions.
fn list_levels(world: &World) {
    for index in 0..query::level_count(world) {
        let name = query::level_name(world, index).unwrap_or("?");
        let (columns, rows) = query::level_rows(world, index).map_or((0, 0), |rows| {
            (
                rows.first().map_or(0, |row| row.chars().count()),
                rows.len(),
            )
        });
        println!("[{index:>2}] {name} ({columns}x{rows})");
    }
}

/// Prints a transfer string for the requested catalog level.
fn export_level(world: &World, index: usize) -> Result<()> {
    let (Some(name), Some(rows)) = (
        query::level_name(world, index),
        query::level_rows(world, index),
    ) else {
        bail!("no level #{index} exists in the catalog");
    };

    let transfer = LevelTransfer::from_level(Level::new(name.to_owned(), rows.to_vec()));
    println!("{}", transfer.encode());
    Ok(())
}

/// Decodes a transfer string, installs the level and persists it.
fn import_level(mut world: World, store: &LevelStore, transfer: &str) -> Result<()> {
    let decoded = LevelTransfer::decode(transfer)?;
    let level = decoded.into_level();
    let name = level.name().to_owned();

    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::InstallLevel {
            level: level.clone(),
        },
        &mut events,
    );

    match events.first() {
        Some(Event::LevelInstalled { index }) => {
            store
                .append(level)
                .context("failed to persist the imported level")?;
            println!("imported '{name}' as level #{index}");
            Ok(())
        }
        Some(Event::LevelRejected { reason }) => {
            bail!("transfer level is not playable: {reason}")
        }
        Some(Event::LevelMalformed { reason }) => {
            bail!("transfer level is malformed: {reason}")
        }
        _ => bail!("the engine did not accept the level"),
    }
}

fn parse_tool(token: &str) -> Option<EditorTool> {
    match token {
        "wall" | "w" => Some(EditorTool::Wall),
        "player" | "p" => Some(EditorTool::Player),
        "box" | "b" => Some(EditorTool::Box),
        "target" | "t" => Some(EditorTool::Target),
        "erase" | "e" => Some(EditorTool::Erase),
        _ => None,
    }
}

fn print_help() {
    println!("moves: u d l r | z undo | p reset | g <level> | e edit mode | q quit");
    println!("editing: t <tool> | a <column> <row> | s <name> to save");
}
