//! Batch execution over a scene
//!
//! Runs one resolved scope through the rename policy, accumulating renamed
//! and failed counts, and produces the user-facing report messages. No step
//! in here can raise a fatal error: scope-resolution failures become
//! informational aborts with zero side effects, and per-container failures
//! (an object without the requested collection) are tallied and never stop
//! the batch.

use crate::engine::rename::RenameDirective;
use crate::engine::resolver::{self, RenameTarget, ScopeQuery};
use crate::scene::{Scene, SelectionContext};
use crate::types::{DataKind, OperatorKind, TargetKind};
use std::fmt;
use tracing::debug;

/// Severity of one report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// One user-facing message produced by a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub severity: Severity,
    pub text: String,
}

impl Report {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: text.into(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Info => write!(f, "{}", self.text),
            Severity::Warning => write!(f, "Warning: {}", self.text),
        }
    }
}

/// Aggregate result of one batch invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Items renamed across all processed containers
    pub renamed: usize,
    /// Containers that lacked the requested collection
    pub failed: usize,
    /// True when the scope itself was empty and nothing was touched
    pub aborted: bool,
    pub reports: Vec<Report>,
}

impl BatchOutcome {
    fn aborted(message: String) -> Self {
        Self {
            renamed: 0,
            failed: 0,
            aborted: true,
            reports: vec![Report::info(message)],
        }
    }
}

/// Execute one batch rename over the scene.
///
/// The selection snapshot is taken by the caller so the engine never reads
/// ambient state. The scene is mutated in place, name by name.
pub fn execute(
    scene: &mut Scene,
    ctx: &SelectionContext,
    query: &ScopeQuery,
    directive: &RenameDirective,
) -> BatchOutcome {
    let selection = match resolver::resolve(query, scene, ctx) {
        Ok(selection) => selection,
        Err(abort) => {
            debug!(%abort, "scope resolution aborted");
            return BatchOutcome::aborted(abort.to_string());
        }
    };

    let mut renamed = 0;
    let mut failed = 0;
    // Constraints seen across bone containers, for the empty-armature warning
    let mut bone_constraints_seen = 0;

    for target in &selection.targets {
        match query.operator {
            OperatorKind::ModifiersConstraints => match *target {
                RenameTarget::Object(idx) => {
                    let obj = &mut scene.objects[idx];
                    match selection.data {
                        DataKind::Modifiers => {
                            if obj.kind.supports_modifiers() {
                                renamed += directive.apply(obj.modifiers.iter_mut());
                            } else {
                                failed += 1;
                            }
                        }
                        // Every object kind owns constraints
                        DataKind::Constraints => {
                            renamed += directive.apply(obj.constraints.iter_mut());
                        }
                    }
                }
                RenameTarget::Bone { object, bone } => {
                    let bone = &mut scene.objects[object].pose_bones[bone];
                    bone_constraints_seen += bone.constraints.len();
                    renamed += directive.apply(bone.constraints.iter_mut());
                }
            },
            OperatorKind::VertexGroups => {
                let RenameTarget::Object(idx) = *target else {
                    continue;
                };
                let obj = &mut scene.objects[idx];
                if obj.kind.supports_vertex_groups() && !obj.vertex_groups.is_empty() {
                    renamed += directive.apply(obj.vertex_groups.iter_mut());
                } else {
                    failed += 1;
                }
            }
        }
    }

    let kind_word = match query.operator {
        OperatorKind::ModifiersConstraints => selection.data.report_word().to_string(),
        OperatorKind::VertexGroups => "Vertex Group(s)".to_string(),
    };

    let mut reports = Vec::new();
    if query.operator == OperatorKind::ModifiersConstraints
        && query.target == TargetKind::Bones
        && bone_constraints_seen == 0
    {
        reports.push(Report::warning(
            "Armature has no bones or selected bones have no constraints.",
        ));
    }
    if renamed > 0 {
        reports.push(Report::info(format!("Renamed {} {}.", renamed, kind_word)));
    } else {
        reports.push(Report::warning(format!("No {} renamed.", kind_word)));
    }

    debug!(renamed, failed, "batch complete");

    BatchOutcome {
        renamed,
        failed,
        aborted: false,
        reports,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Modifier, ObjectKind, SceneObject, VertexGroup};
    use crate::types::ScopeKind;

    fn modifier(name: &str) -> Modifier {
        Modifier {
            name: name.to_string(),
            kind: String::new(),
        }
    }

    fn run(
        scene: &mut Scene,
        query: ScopeQuery,
        directive: RenameDirective,
    ) -> BatchOutcome {
        let ctx = SelectionContext::from_scene(scene);
        execute(scene, &ctx, &query, &directive)
    }

    #[test]
    fn test_modifier_find_replace_over_selected_objects() {
        let mut cube = SceneObject::new("Cube", ObjectKind::Mesh);
        cube.selected = true;
        cube.modifiers = vec![modifier("Bevel"), modifier("Subsurf"), modifier("Bevel.001")];
        let mut scene = Scene {
            objects: vec![cube],
            active: None,
        };

        let outcome = run(
            &mut scene,
            ScopeQuery::default(),
            RenameDirective::find_replace("Bevel", "Chamfer", false),
        );

        assert_eq!(outcome.renamed, 2);
        assert!(!outcome.aborted);
        assert_eq!(outcome.reports, vec![Report::info("Renamed 2 modifiers.")]);
        let names: Vec<&str> = scene.objects[0]
            .modifiers
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Chamfer", "Subsurf", "Chamfer.001"]);
    }

    #[test]
    fn test_unsupported_kind_counts_failed_and_continues() {
        let mut camera = SceneObject::new("Camera", ObjectKind::Camera);
        camera.selected = true;
        let mut cube = SceneObject::new("Cube", ObjectKind::Mesh);
        cube.selected = true;
        cube.modifiers = vec![modifier("Bevel")];
        let mut scene = Scene {
            objects: vec![camera, cube],
            active: None,
        };

        let outcome = run(
            &mut scene,
            ScopeQuery::default(),
            RenameDirective::prefix("X-"),
        );

        assert_eq!(outcome.renamed, 1);
        assert_eq!(outcome.failed, 1);
        assert_eq!(scene.objects[1].modifiers[0].name, "X-Bevel");
    }

    #[test]
    fn test_zero_renames_reports_warning() {
        let mut camera = SceneObject::new("Camera", ObjectKind::Camera);
        camera.selected = true;
        let mut scene = Scene {
            objects: vec![camera],
            active: None,
        };

        let outcome = run(
            &mut scene,
            ScopeQuery::default(),
            RenameDirective::find_replace("Bevel", "Chamfer", false),
        );

        assert_eq!(outcome.renamed, 0);
        assert_eq!(outcome.failed, 1);
        assert_eq!(
            outcome.reports,
            vec![Report::warning("No modifiers renamed.")]
        );
    }

    #[test]
    fn test_empty_scope_aborts_with_zero_side_effects() {
        let mut scene = Scene {
            objects: vec![SceneObject::new("Cube", ObjectKind::Mesh)],
            active: None,
        };
        let before = scene.clone();

        let outcome = run(
            &mut scene,
            ScopeQuery::default(),
            RenameDirective::prefix("X-"),
        );

        assert!(outcome.aborted);
        assert_eq!(outcome.renamed, 0);
        assert_eq!(outcome.reports, vec![Report::info("No object(s) selected.")]);
        assert_eq!(scene, before);
    }

    #[test]
    fn test_vertex_groups_skip_incapable_kinds_as_failed() {
        let mut cube = SceneObject::new("Cube", ObjectKind::Mesh);
        cube.vertex_groups = vec![
            VertexGroup {
                name: "Arm_L".to_string(),
            },
            VertexGroup {
                name: "Arm_R".to_string(),
            },
        ];
        let light = SceneObject::new("Light", ObjectKind::Light);
        let bare_mesh = SceneObject::new("Plane", ObjectKind::Mesh);
        let mut scene = Scene {
            objects: vec![cube, light, bare_mesh],
            active: None,
        };

        let query = ScopeQuery {
            operator: OperatorKind::VertexGroups,
            scope: ScopeKind::All,
            ..ScopeQuery::default()
        };
        let outcome = run(&mut scene, query, RenameDirective::prefix("DEF-"));

        assert_eq!(outcome.renamed, 2);
        // Light cannot own vertex groups; Plane has none
        assert_eq!(outcome.failed, 2);
        assert_eq!(
            outcome.reports,
            vec![Report::info("Renamed 2 Vertex Group(s).")]
        );
        let names: Vec<&str> = scene.objects[0]
            .vertex_groups
            .iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(names, vec!["DEF-Arm_L", "DEF-Arm_R"]);
    }

    #[test]
    fn test_bone_batch_renames_constraints_only() {
        let mut scene = Scene::demo();
        scene.active = Some(1);

        let query = ScopeQuery {
            operator: OperatorKind::ModifiersConstraints,
            target: TargetKind::Bones,
            scope: ScopeKind::All,
            // Requesting modifiers is overridden for bones
            data: DataKind::Modifiers,
        };
        let outcome = run(
            &mut scene,
            query,
            RenameDirective::find_replace("Copy Rotation", "Rot", true),
        );

        assert_eq!(outcome.renamed, 2);
        assert_eq!(
            outcome.reports,
            vec![Report::info("Renamed 2 constraints.")]
        );
        assert_eq!(scene.objects[1].pose_bones[0].constraints[0].name, "Rot");
    }

    #[test]
    fn test_boneless_armature_surfaces_warning() {
        let rig = SceneObject::new("Rig", ObjectKind::Armature);
        let mut scene = Scene {
            objects: vec![rig],
            active: Some(0),
        };

        let query = ScopeQuery {
            operator: OperatorKind::ModifiersConstraints,
            target: TargetKind::Bones,
            scope: ScopeKind::All,
            data: DataKind::Constraints,
        };
        let outcome = run(&mut scene, query, RenameDirective::prefix("X-"));

        assert!(!outcome.aborted);
        assert_eq!(outcome.renamed, 0);
        assert_eq!(
            outcome.reports,
            vec![
                Report::warning("Armature has no bones or selected bones have no constraints."),
                Report::warning("No constraints renamed."),
            ]
        );
    }

    #[test]
    fn test_report_display_prefixes_warnings() {
        assert_eq!(Report::info("Renamed 2 modifiers.").to_string(), "Renamed 2 modifiers.");
        assert_eq!(
            Report::warning("No modifiers renamed.").to_string(),
            "Warning: No modifiers renamed."
        );
    }
}
