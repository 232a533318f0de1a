#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure editor-mode system that translates authoring input into commands.

use warehouse_core::{CellCoord, Command, EditorTool, Event, PlayMode};

/// Input snapshot distilled from adapter-provided authoring input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorInput {
    /// Tool the author asked to activate on this frame, if any.
    pub requested_tool: Option<EditorTool>,
    /// Indicates whether the author confirmed a placement on this frame.
    pub apply_action: bool,
    /// Canvas cell currently under the cursor.
    pub cursor_cell: Option<CellCoord>,
    /// Name to record for the canvas when a save is requested on this frame.
    pub save_request: Option<String>,
}

impl EditorInput {
    /// Creates a new input descriptor with explicit field values.
    #[must_use]
    pub const fn new(
        requested_tool: Option<EditorTool>,
        apply_action: bool,
        cursor_cell: Option<CellCoord>,
        save_request: Option<String>,
    ) -> Self {
        Self {
            requested_tool,
            apply_action,
            cursor_cell,
            save_request,
        }
    }
}

impl Default for EditorInput {
    fn default() -> Self {
        Self {
            requested_tool: None,
            apply_action: false,
            cursor_cell: None,
            save_request: None,
        }
    }
}

/// Editor-mode system that translates authoring input into level commands.
#[derive(Debug, Clone)]
pub struct Editor {
    play_mode: PlayMode,
    active_tool: EditorTool,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            play_mode: PlayMode::Play,
            active_tool: EditorTool::Wall,
        }
    }
}

impl Editor {
    /// Creates a new editor system instance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            play_mode: PlayMode::Play,
            active_tool: EditorTool::Wall,
        }
    }

    /// Tool the system believes is active, tracked from world events.
    #[must_use]
    pub const fn active_tool(&self) -> EditorTool {
        self.active_tool
    }

    /// Consumes world events and authoring input to emit editor commands.
    ///
    /// The system stays silent outside edit mode; mode and tool state are
    /// tracked exclusively from the world's event stream so the system never
    /// drifts from the authoritative session.
    pub fn handle(&mut self, events: &[Event], input: EditorInput, out: &mut Vec<Command>) {
        for event in events {
            match event {
                Event::PlayModeChanged { mode } => self.play_mode = *mode,
                Event::ToolSelected { tool } => self.active_tool = *tool,
                _ => {}
            }
        }

        if self.play_mode != PlayMode::Edit {
            return;
        }

        if let Some(tool) = input.requested_tool {
            if tool != self.active_tool {
                out.push(Command::SelectTool { tool });
            }
        }

        if input.apply_action {
            if let Some(cell) = input.cursor_cell {
                out.push(Command::ApplyTool { cell });
            }
        }

        if let Some(name) = input.save_request {
            out.push(Command::SaveLevel { name });
        }
    }
}
