use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rigrename - batch-rename modifiers, constraints, and vertex groups
#[derive(Parser)]
#[command(name = "rigrename")]
#[command(about = "Batch-rename modifiers, constraints, and vertex groups in 3D scene documents")]
#[command(version)]
pub struct Cli {
    /// Dry-run mode: resolve, rename, and report without writing the
    /// document back.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a scene document in the interactive TUI
    Edit {
        /// Path to the scene document (omit to edit a built-in demo scene)
        scene: Option<PathBuf>,
    },
    /// Run one batch rename headlessly on a scene document
    Rename {
        /// Path to the scene document (JSON)
        #[arg(short, long)]
        scene: PathBuf,

        /// Write the renamed document here instead of in-place
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Item family to rename (modifiers-constraints, vertex-groups)
        #[arg(long, default_value = "modifiers-constraints")]
        items: String,

        /// Collection renamed on each item (modifiers, constraints)
        #[arg(long, default_value = "modifiers")]
        data: String,

        /// Rename on objects or bones
        #[arg(long, default_value = "objects")]
        target: String,

        /// Batch coverage (selected, all)
        #[arg(long, default_value = "selected")]
        scope: String,

        /// Renaming operation (find-replace, prefix, suffix)
        #[arg(long, default_value = "find-replace")]
        operation: String,

        /// String to find (find-replace)
        #[arg(long, default_value = "")]
        find: String,

        /// Replacement string (find-replace)
        #[arg(long, default_value = "")]
        replace: String,

        /// Only rename names that equal the find string exactly
        #[arg(long)]
        exact: bool,

        /// Prefix to prepend (prefix operation)
        #[arg(long, default_value = "")]
        prefix: String,

        /// Suffix to append (suffix operation)
        #[arg(long, default_value = "")]
        suffix: String,
    },
    /// Validate a scene document
    Validate {
        /// Path to the scene document to validate
        scene: PathBuf,
    },
    /// Write the built-in demo scene to a file
    Demo {
        /// Destination path
        #[arg(short, long, default_value = "scene.json")]
        output: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
