//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, DialogState)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState, DialogField, DialogState};

use crate::engine::batch;
use crate::input::{self, Action};
use crate::scene::{Scene, SelectionContext};
use crate::ui;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    state: AppState,
}

impl App {
    /// Create a new application instance over a scene document
    pub fn new(scene: Scene, scene_path: Option<PathBuf>) -> Self {
        info!(objects = scene.objects.len(), "creating App instance");
        Self {
            state: AppState::new(scene, scene_path),
        }
    }

    /// Run the application event loop until the user quits
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        loop {
            terminal.draw(|f| ui::render(f, &self.state))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.state.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Read-only access to the application state (for tests)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match input::map_key(self.state.mode, key) {
            Action::Quit => self.state.should_quit = true,
            Action::MoveUp => match self.state.mode {
                AppMode::ObjectList => self.state.move_up(),
                AppMode::RenameDialog => {
                    if let Some(dialog) = self.state.dialog.as_mut() {
                        dialog.focus_prev();
                    }
                }
            },
            Action::MoveDown => match self.state.mode {
                AppMode::ObjectList => self.state.move_down(),
                AppMode::RenameDialog => {
                    if let Some(dialog) = self.state.dialog.as_mut() {
                        dialog.focus_next();
                    }
                }
            },
            Action::ToggleSelect => self.state.toggle_selected(),
            Action::SetActive => self.state.set_active(),
            Action::OpenDialog => self.state.open_dialog(),
            Action::Save => self.save(),
            Action::ToggleHelp => self.state.help_visible = !self.state.help_visible,
            Action::CycleLeft => {
                if let Some(dialog) = self.state.dialog.as_mut() {
                    dialog.cycle_focused(false);
                }
            }
            Action::CycleRight => {
                if let Some(dialog) = self.state.dialog.as_mut() {
                    dialog.cycle_focused(true);
                }
            }
            Action::Insert(c) => {
                if let Some(dialog) = self.state.dialog.as_mut() {
                    if dialog.focused_field().is_text() {
                        dialog.insert_char(c);
                    } else {
                        // Space also toggles/cycles choice fields
                        if c == ' ' {
                            dialog.cycle_focused(true);
                        }
                    }
                }
            }
            Action::Backspace => {
                if let Some(dialog) = self.state.dialog.as_mut() {
                    dialog.backspace();
                }
            }
            Action::Confirm => self.execute_batch(),
            Action::Cancel => self.state.close_dialog(),
            Action::None => {}
        }
    }

    /// Run the configured batch rename against the scene
    fn execute_batch(&mut self) {
        let Some(dialog) = self.state.dialog.clone() else {
            return;
        };

        let query = dialog.query();
        let directive = dialog.directive();
        let ctx = SelectionContext::from_scene(&self.state.scene);
        debug!(?query, "executing batch rename");

        let outcome = batch::execute(&mut self.state.scene, &ctx, &query, &directive);

        if outcome.renamed > 0 {
            self.state.dirty = true;
        }
        self.state.status_message = outcome
            .reports
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.state.close_dialog();
    }

    /// Write the scene document back to disk
    fn save(&mut self) {
        let Some(path) = self.state.scene_path.clone() else {
            self.state.status_message =
                "Demo scene has no file; run with a scene path to save.".to_string();
            return;
        };

        match self.state.scene.save_to_file(&path) {
            Ok(()) => {
                self.state.dirty = false;
                self.state.status_message = format!("Saved {}", path.display());
            }
            Err(e) => {
                self.state.status_message = format!("Save failed: {}", e);
            }
        }
    }
}
