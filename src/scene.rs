//! Scene document model
//!
//! This module is the stand-in for a 3D application's live scene graph: a
//! typed, in-memory document of objects and their named sub-items that can be
//! saved to and loaded from JSON. The batch renamer only ever mutates the
//! `name` field of modifiers, constraints, and vertex groups — it never
//! creates or destroys items, and never renames objects or bones themselves.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::{Display, EnumIter, EnumString};

/// The kind of a scene object.
///
/// The kind decides which named collections an object can carry: every kind
/// owns constraints, but only some own modifiers or vertex groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ObjectKind {
    #[default]
    Mesh,
    Curve,
    Surface,
    Meta,
    Font,
    Armature,
    Lattice,
    Camera,
    Light,
    Empty,
}

impl ObjectKind {
    /// Check if objects of this kind carry a modifier stack
    pub fn supports_modifiers(&self) -> bool {
        matches!(
            self,
            Self::Mesh | Self::Curve | Self::Surface | Self::Meta | Self::Font | Self::Lattice
        )
    }

    /// Check if objects of this kind can own vertex groups
    pub fn supports_vertex_groups(&self) -> bool {
        matches!(
            self,
            Self::Mesh
                | Self::Curve
                | Self::Surface
                | Self::Meta
                | Self::Font
                | Self::Armature
                | Self::Lattice
        )
    }
}

/// Any document item exposing a mutable name.
///
/// The rename engine works exclusively through this trait, so it can be
/// exercised against synthetic collections in tests without a scene at all.
pub trait Named {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
}

/// A non-destructive operation attached to an object (e.g. a bevel)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub name: String,
    /// Modifier type tag, carried verbatim for document fidelity
    #[serde(default)]
    pub kind: String,
}

/// A behavioral link restricting an object's or bone's transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub name: String,
    /// Constraint type tag, carried verbatim for document fidelity
    #[serde(default)]
    pub kind: String,
}

/// A named weighted subset of an object's mesh vertices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexGroup {
    pub name: String,
}

/// The posable representation of a bone within an armature.
///
/// Pose bones act only as constraint containers here; the batch renamer
/// never changes the bone name itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoseBone {
    pub name: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

/// One object in the scene with its named sub-item collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub vertex_groups: Vec<VertexGroup>,
    /// Only meaningful for armatures
    #[serde(default)]
    pub pose_bones: Vec<PoseBone>,
}

impl SceneObject {
    /// Create an object with empty collections
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            selected: false,
            modifiers: Vec::new(),
            constraints: Vec::new(),
            vertex_groups: Vec::new(),
            pose_bones: Vec::new(),
        }
    }
}

/// Explicit selection state, passed into the resolver instead of being read
/// from ambient scene flags. Derived once per invocation by the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionContext {
    /// Indices of selected objects, in scene order
    pub selected: Vec<usize>,
    /// Index of the active object, if any
    pub active: Option<usize>,
}

impl SelectionContext {
    /// Snapshot the selection flags of a scene
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            selected: scene
                .objects
                .iter()
                .enumerate()
                .filter(|(_, obj)| obj.selected)
                .map(|(i, _)| i)
                .collect(),
            active: scene.active,
        }
    }
}

/// A scene document: the full object list plus the active-object marker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    /// Index of the active object, if any
    #[serde(default)]
    pub active: Option<usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save the scene document to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize scene document to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write scene document to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load a scene document from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scene document from {:?}", path.as_ref()))?;

        let scene: Self =
            serde_json::from_str(&content).context("Failed to parse scene document JSON")?;

        Ok(scene)
    }

    /// Validate document consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(active) = self.active {
            if active >= self.objects.len() {
                anyhow::bail!(
                    "Active object index {} is out of range ({} objects)",
                    active,
                    self.objects.len()
                );
            }
        }

        for obj in &self.objects {
            if obj.name.trim().is_empty() {
                anyhow::bail!("Scene contains an object with an empty name");
            }
            if !obj.pose_bones.is_empty() && obj.kind != ObjectKind::Armature {
                anyhow::bail!(
                    "Object '{}' has pose bones but is a {}, not an armature",
                    obj.name,
                    obj.kind
                );
            }
            if !obj.modifiers.is_empty() && !obj.kind.supports_modifiers() {
                anyhow::bail!(
                    "Object '{}' has modifiers but a {} cannot carry them",
                    obj.name,
                    obj.kind
                );
            }
            if !obj.vertex_groups.is_empty() && !obj.kind.supports_vertex_groups() {
                anyhow::bail!(
                    "Object '{}' has vertex groups but a {} cannot own them",
                    obj.name,
                    obj.kind
                );
            }
        }

        Ok(())
    }

    /// Built-in demo scene used when the TUI is launched without a document
    pub fn demo() -> Self {
        let mut cube = SceneObject::new("Cube", ObjectKind::Mesh);
        cube.selected = true;
        cube.modifiers = vec![
            Modifier {
                name: "Bevel".to_string(),
                kind: "BEVEL".to_string(),
            },
            Modifier {
                name: "Subsurf".to_string(),
                kind: "SUBSURF".to_string(),
            },
            Modifier {
                name: "Bevel.001".to_string(),
                kind: "BEVEL".to_string(),
            },
        ];
        cube.constraints = vec![Constraint {
            name: "Follow Path".to_string(),
            kind: "FOLLOW_PATH".to_string(),
        }];
        cube.vertex_groups = vec![
            VertexGroup {
                name: "Group".to_string(),
            },
            VertexGroup {
                name: "Group.001".to_string(),
            },
        ];

        let mut rig = SceneObject::new("Rig", ObjectKind::Armature);
        rig.pose_bones = vec![
            PoseBone {
                name: "Arm_L".to_string(),
                selected: true,
                constraints: vec![Constraint {
                    name: "Copy Rotation".to_string(),
                    kind: "COPY_ROTATION".to_string(),
                }],
            },
            PoseBone {
                name: "Arm_R".to_string(),
                selected: false,
                constraints: vec![Constraint {
                    name: "Copy Rotation".to_string(),
                    kind: "COPY_ROTATION".to_string(),
                }],
            },
        ];

        let camera = SceneObject::new("Camera", ObjectKind::Camera);

        Self {
            objects: vec![cube, rig, camera],
            active: Some(0),
        }
    }
}

impl Named for Modifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Named for Constraint {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Named for VertexGroup {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
