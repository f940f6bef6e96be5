//! Application state definitions
//!
//! Contains all state-related types for the application including AppState,
//! AppMode, and the rename dialog state. Dialog behavior lives here as pure
//! state transitions so it can be tested without a terminal.

use crate::engine::rename::RenameDirective;
use crate::engine::resolver::ScopeQuery;
use crate::scene::Scene;
use crate::types::{DataKind, OperationKind, OperatorKind, ScopeKind, TargetKind};
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Object list - browse the scene, adjust selection, pick the active object
    ObjectList,
    /// Modal batch-rename dialog
    RenameDialog,
}

/// The fields the rename dialog can show.
///
/// Which of these are visible depends on the current operator, target, and
/// operation choices; see [`DialogState::visible_fields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    Operator,
    Target,
    Data,
    Scope,
    Operation,
    Find,
    Replace,
    ExactMatch,
    Prefix,
    Suffix,
}

impl DialogField {
    /// Display label for the field
    pub fn label(&self) -> &'static str {
        match self {
            Self::Operator => "Operator",
            Self::Target => "Target",
            Self::Data => "Data",
            Self::Scope => "Scope",
            Self::Operation => "Operation",
            Self::Find => "Find",
            Self::Replace => "Replace",
            Self::ExactMatch => "Exact Match",
            Self::Prefix => "Prefix",
            Self::Suffix => "Suffix",
        }
    }

    /// Check if this field takes free text (as opposed to cycling choices)
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Find | Self::Replace | Self::Prefix | Self::Suffix)
    }
}

/// State of the modal rename dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogState {
    pub operator: OperatorKind,
    pub target: TargetKind,
    pub data: DataKind,
    pub scope: ScopeKind,
    pub operation: OperationKind,
    pub find: String,
    pub replace: String,
    pub prefix: String,
    pub suffix: String,
    pub exact_match: bool,
    /// Index into the currently visible field list
    pub focus: usize,
}

impl Default for DialogState {
    fn default() -> Self {
        Self {
            operator: OperatorKind::default(),
            target: TargetKind::default(),
            data: DataKind::default(),
            scope: ScopeKind::default(),
            operation: OperationKind::default(),
            find: String::new(),
            replace: String::new(),
            prefix: String::new(),
            suffix: String::new(),
            exact_match: false,
            focus: 0,
        }
    }
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fields visible for the current operator/target/operation choices.
    ///
    /// Mirrors the dialog layout: bone targeting hides the data row (it is
    /// forced to constraints), and only the active operation's inputs show.
    pub fn visible_fields(&self) -> Vec<DialogField> {
        let mut fields = vec![DialogField::Operator];

        match self.operator {
            OperatorKind::ModifiersConstraints => {
                fields.push(DialogField::Target);
                if self.target == TargetKind::Objects {
                    fields.push(DialogField::Data);
                }
                fields.push(DialogField::Scope);
            }
            OperatorKind::VertexGroups => {
                fields.push(DialogField::Scope);
            }
        }

        fields.push(DialogField::Operation);
        match self.operation {
            OperationKind::FindReplace => {
                fields.push(DialogField::Find);
                fields.push(DialogField::Replace);
                fields.push(DialogField::ExactMatch);
            }
            OperationKind::Prefix => fields.push(DialogField::Prefix),
            OperationKind::Suffix => fields.push(DialogField::Suffix),
        }

        fields
    }

    /// The field currently holding focus
    pub fn focused_field(&self) -> DialogField {
        let fields = self.visible_fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    /// Move focus to the next visible field, wrapping
    pub fn focus_next(&mut self) {
        let len = self.visible_fields().len();
        self.focus = (self.focus + 1) % len;
    }

    /// Move focus to the previous visible field, wrapping
    pub fn focus_prev(&mut self) {
        let len = self.visible_fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Cycle the focused choice field forwards or backwards.
    ///
    /// Text fields ignore cycling. Switching the target to bones forces the
    /// data kind to constraints; bones carry no modifier stack.
    pub fn cycle_focused(&mut self, forward: bool) {
        match self.focused_field() {
            DialogField::Operator => {
                self.operator = cycle_enum(self.operator, forward);
            }
            DialogField::Target => {
                self.target = cycle_enum(self.target, forward);
                if self.target == TargetKind::Bones {
                    self.data = DataKind::Constraints;
                }
            }
            DialogField::Data => {
                self.data = cycle_enum(self.data, forward);
            }
            DialogField::Scope => {
                self.scope = cycle_enum(self.scope, forward);
            }
            DialogField::Operation => {
                self.operation = cycle_enum(self.operation, forward);
            }
            DialogField::ExactMatch => {
                self.exact_match = !self.exact_match;
            }
            _ => {}
        }
        self.clamp_focus();
    }

    /// Append a character to the focused text field
    pub fn insert_char(&mut self, c: char) {
        if let Some(value) = self.focused_text_mut() {
            value.push(c);
        }
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Some(value) = self.focused_text_mut() {
            value.pop();
        }
    }

    /// The directive described by the current dialog values
    pub fn directive(&self) -> RenameDirective {
        RenameDirective {
            operation: self.operation,
            find: self.find.clone(),
            replace: self.replace.clone(),
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            exact_match: self.exact_match,
        }
    }

    /// The scope query described by the current dialog values
    pub fn query(&self) -> ScopeQuery {
        ScopeQuery {
            operator: self.operator,
            target: self.target,
            scope: self.scope,
            data: self.data,
        }
    }

    /// Informational label shown when bone targeting forces constraints
    pub fn bones_info(&self) -> Option<&'static str> {
        (self.operator == OperatorKind::ModifiersConstraints
            && self.target == TargetKind::Bones)
            .then_some("Data type is set to constraints for bones.")
    }

    /// Warning label shown when an all-bones batch covers only the active armature
    pub fn bones_scope_warning(&self) -> Option<&'static str> {
        (self.operator == OperatorKind::ModifiersConstraints
            && self.target == TargetKind::Bones
            && self.scope == ScopeKind::All)
            .then_some("Only rename all bones on active armature.")
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused_field() {
            DialogField::Find => Some(&mut self.find),
            DialogField::Replace => Some(&mut self.replace),
            DialogField::Prefix => Some(&mut self.prefix),
            DialogField::Suffix => Some(&mut self.suffix),
            _ => None,
        }
    }

    // Visible fields shrink when choices change; keep focus in range
    fn clamp_focus(&mut self) {
        let len = self.visible_fields().len();
        if self.focus >= len {
            self.focus = len - 1;
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// The scene document being edited
    pub scene: Scene,
    /// Where the document came from; `None` for the built-in demo scene
    pub scene_path: Option<PathBuf>,
    /// Cursor position in the object list
    pub list_selection: usize,
    /// Status message for user feedback
    pub status_message: String,
    /// Rename dialog state while the dialog is open
    pub dialog: Option<DialogState>,
    /// Unsaved changes flag
    pub dirty: bool,
    /// Whether the help overlay is visible
    pub help_visible: bool,
    /// Set when the user asks to quit
    pub should_quit: bool,
}

impl AppState {
    pub fn new(scene: Scene, scene_path: Option<PathBuf>) -> Self {
        Self {
            mode: AppMode::ObjectList,
            scene,
            scene_path,
            list_selection: 0,
            status_message: "Press 'r' to batch rename, '?' for help".to_string(),
            dialog: None,
            dirty: false,
            help_visible: false,
            should_quit: false,
        }
    }

    /// Move the object-list cursor up
    pub fn move_up(&mut self) {
        self.list_selection = self.list_selection.saturating_sub(1);
    }

    /// Move the object-list cursor down
    pub fn move_down(&mut self) {
        if self.list_selection + 1 < self.scene.objects.len() {
            self.list_selection += 1;
        }
    }

    /// Toggle the selection flag of the object under the cursor
    pub fn toggle_selected(&mut self) {
        if let Some(obj) = self.scene.objects.get_mut(self.list_selection) {
            obj.selected = !obj.selected;
            self.dirty = true;
        }
    }

    /// Make the object under the cursor the active object
    pub fn set_active(&mut self) {
        if self.list_selection < self.scene.objects.len() {
            self.scene.active = Some(self.list_selection);
            self.dirty = true;
        }
    }

    /// Open the rename dialog
    pub fn open_dialog(&mut self) {
        self.dialog = Some(DialogState::new());
        self.mode = AppMode::RenameDialog;
    }

    /// Close the rename dialog without applying
    pub fn close_dialog(&mut self) {
        self.dialog = None;
        self.mode = AppMode::ObjectList;
    }
}

/// Step an enum value forwards or backwards through its variants, wrapping.
fn cycle_enum<T>(current: T, forward: bool) -> T
where
    T: Copy + PartialEq + IntoEnumIterator,
{
    let variants: Vec<T> = T::iter().collect();
    let pos = variants
        .iter()
        .position(|v| *v == current)
        .unwrap_or_default();
    let len = variants.len();
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    variants[next]
}
