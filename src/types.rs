//! Type-safe rename directive and scope types
//!
//! This module replaces stringly-typed batch-rename settings with proper Rust
//! enums that provide compile-time validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which family of named items a batch operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum OperatorKind {
    #[default]
    #[strum(serialize = "modifiers-constraints")]
    ModifiersConstraints,
    #[strum(serialize = "vertex-groups")]
    VertexGroups,
}

/// Which named collection is renamed on each item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum DataKind {
    #[default]
    #[strum(serialize = "modifiers")]
    Modifiers,
    #[strum(serialize = "constraints")]
    Constraints,
}

/// Whether the batch targets whole objects or pose bones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TargetKind {
    #[default]
    #[strum(serialize = "objects")]
    Objects,
    #[strum(serialize = "bones")]
    Bones,
}

/// Whether the batch covers the selection or the whole scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ScopeKind {
    #[default]
    #[strum(serialize = "selected")]
    Selected,
    #[strum(serialize = "all")]
    All,
}

/// The renaming operation applied to each matched name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum OperationKind {
    #[default]
    #[strum(serialize = "find-replace")]
    FindReplace,
    #[strum(serialize = "prefix")]
    Prefix,
    #[strum(serialize = "suffix")]
    Suffix,
}

impl DataKind {
    /// Report wording for the "Renamed N ..." / "No ... renamed." messages
    pub fn report_word(&self) -> &'static str {
        match self {
            Self::Modifiers => "modifiers",
            Self::Constraints => "constraints",
        }
    }
}

impl OperationKind {
    /// Check if this operation renames every item unconditionally
    pub fn is_unconditional(&self) -> bool {
        matches!(self, Self::Prefix | Self::Suffix)
    }
}
