//! rigrename library
//!
//! Core functionality for the batch renamer: the scene document model, the
//! rename engine (policy, scope resolution, batch execution), and the TUI
//! shell built on top of them.

pub mod app;
pub mod cli;
pub mod engine;
pub mod error;
pub mod input;
pub mod scene;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState, DialogField, DialogState};
pub use engine::batch::{BatchOutcome, Report, Severity, execute};
pub use engine::rename::RenameDirective;
pub use engine::resolver::{RenameTarget, ScopeAbort, ScopeQuery, ScopeSelection, resolve};
pub use error::RigRenameError;
pub use scene::{
    Constraint, Modifier, Named, ObjectKind, PoseBone, Scene, SceneObject, SelectionContext,
    VertexGroup,
};
pub use types::{DataKind, OperationKind, OperatorKind, ScopeKind, TargetKind};
