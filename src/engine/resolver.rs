//! Scope resolution
//!
//! Translates the four scope selectors (operator, target, scope, data) plus
//! an explicit selection snapshot into the ordered list of containers a batch
//! will process. Resolution never mutates the scene; when the scope comes up
//! empty the resolver aborts with an informational signal and the batch has
//! zero side effects.
//!
//! # Resolution Rules
//!
//! | Operator | Target  | Scope    | Containers |
//! |----------|---------|----------|------------|
//! | Mod/Con  | Objects | Selected | selected objects (abort if none) |
//! | Mod/Con  | Objects | All      | every scene object |
//! | Mod/Con  | Bones   | Selected | selected bones of selected armatures (abort if none) |
//! | Mod/Con  | Bones   | All      | all bones of the active armature (abort if none) |
//! | VGroups  | —       | Selected | selected objects (abort if none) |
//! | VGroups  | —       | All      | every scene object (abort if scene empty) |
//!
//! Bone targeting always forces the data kind to constraints; bones carry no
//! modifier stack.

use crate::scene::{ObjectKind, Scene, SelectionContext};
use crate::types::{DataKind, OperatorKind, ScopeKind, TargetKind};
use std::fmt;

/// The four scope selectors of one batch invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeQuery {
    pub operator: OperatorKind,
    pub target: TargetKind,
    pub scope: ScopeKind,
    pub data: DataKind,
}

/// One container of named items to process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameTarget {
    /// An object, addressed by its index in the scene
    Object(usize),
    /// A pose bone, addressed by owning object index and bone index
    Bone { object: usize, bone: usize },
}

/// A resolved scope: the containers to process plus the effective data kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeSelection {
    pub targets: Vec<RenameTarget>,
    /// Data kind after bone forcing
    pub data: DataKind,
}

/// Informational abort: the scope itself was empty.
///
/// Not a failure — the shells report the message and the invocation ends
/// with zero side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeAbort {
    NoObjectsSelected,
    NoBonesSelected,
    NoActiveArmature,
    EmptyScene,
}

impl fmt::Display for ScopeAbort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoObjectsSelected => write!(f, "No object(s) selected."),
            Self::NoBonesSelected => write!(f, "No bone(s) selected."),
            Self::NoActiveArmature => write!(f, "No active armature."),
            Self::EmptyScene => write!(f, "No objects in the scene."),
        }
    }
}

/// Resolve a scope query against a scene and an explicit selection snapshot.
pub fn resolve(
    query: &ScopeQuery,
    scene: &Scene,
    ctx: &SelectionContext,
) -> Result<ScopeSelection, ScopeAbort> {
    match query.operator {
        OperatorKind::ModifiersConstraints => resolve_modcon(query, scene, ctx),
        OperatorKind::VertexGroups => resolve_vertex_groups(query, scene, ctx),
    }
}

fn resolve_modcon(
    query: &ScopeQuery,
    scene: &Scene,
    ctx: &SelectionContext,
) -> Result<ScopeSelection, ScopeAbort> {
    match query.target {
        TargetKind::Objects => {
            let targets: Vec<RenameTarget> = match query.scope {
                ScopeKind::Selected => {
                    let selected = selected_objects(scene, ctx);
                    if selected.is_empty() {
                        return Err(ScopeAbort::NoObjectsSelected);
                    }
                    selected
                }
                ScopeKind::All => all_objects(scene),
            };

            Ok(ScopeSelection {
                targets,
                data: query.data,
            })
        }
        TargetKind::Bones => {
            let targets = match query.scope {
                ScopeKind::Selected => {
                    let mut bones = Vec::new();
                    for &obj_idx in &ctx.selected {
                        let Some(obj) = scene.objects.get(obj_idx) else {
                            continue;
                        };
                        if obj.kind != ObjectKind::Armature {
                            continue;
                        }
                        for (bone_idx, bone) in obj.pose_bones.iter().enumerate() {
                            if bone.selected {
                                bones.push(RenameTarget::Bone {
                                    object: obj_idx,
                                    bone: bone_idx,
                                });
                            }
                        }
                    }
                    if bones.is_empty() {
                        return Err(ScopeAbort::NoBonesSelected);
                    }
                    bones
                }
                ScopeKind::All => {
                    let active = ctx
                        .active
                        .and_then(|idx| scene.objects.get(idx).map(|obj| (idx, obj)))
                        .filter(|(_, obj)| obj.kind == ObjectKind::Armature)
                        .ok_or(ScopeAbort::NoActiveArmature)?;

                    let (obj_idx, obj) = active;
                    obj.pose_bones
                        .iter()
                        .enumerate()
                        .map(|(bone_idx, _)| RenameTarget::Bone {
                            object: obj_idx,
                            bone: bone_idx,
                        })
                        .collect()
                }
            };

            // Bones carry no modifier stack
            Ok(ScopeSelection {
                targets,
                data: DataKind::Constraints,
            })
        }
    }
}

fn resolve_vertex_groups(
    query: &ScopeQuery,
    scene: &Scene,
    ctx: &SelectionContext,
) -> Result<ScopeSelection, ScopeAbort> {
    let targets = match query.scope {
        ScopeKind::Selected => {
            let selected = selected_objects(scene, ctx);
            if selected.is_empty() {
                return Err(ScopeAbort::NoObjectsSelected);
            }
            selected
        }
        ScopeKind::All => {
            if scene.objects.is_empty() {
                return Err(ScopeAbort::EmptyScene);
            }
            all_objects(scene)
        }
    };

    Ok(ScopeSelection {
        targets,
        data: query.data,
    })
}

fn selected_objects(scene: &Scene, ctx: &SelectionContext) -> Vec<RenameTarget> {
    ctx.selected
        .iter()
        .filter(|&&idx| idx < scene.objects.len())
        .map(|&idx| RenameTarget::Object(idx))
        .collect()
}

fn all_objects(scene: &Scene) -> Vec<RenameTarget> {
    (0..scene.objects.len()).map(RenameTarget::Object).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{PoseBone, SceneObject};

    fn bone(name: &str, selected: bool) -> PoseBone {
        PoseBone {
            name: name.to_string(),
            selected,
            constraints: Vec::new(),
        }
    }

    /// Scene: selected mesh, unselected armature with one selected bone, camera
    fn test_scene() -> Scene {
        let mut cube = SceneObject::new("Cube", ObjectKind::Mesh);
        cube.selected = true;

        let mut rig = SceneObject::new("Rig", ObjectKind::Armature);
        rig.pose_bones = vec![bone("Arm_L", true), bone("Arm_R", false)];

        let camera = SceneObject::new("Camera", ObjectKind::Camera);

        Scene {
            objects: vec![cube, rig, camera],
            active: Some(1),
        }
    }

    fn query(operator: OperatorKind, target: TargetKind, scope: ScopeKind) -> ScopeQuery {
        ScopeQuery {
            operator,
            target,
            scope,
            data: DataKind::Modifiers,
        }
    }

    #[test]
    fn test_selected_objects_scope() {
        let scene = test_scene();
        let ctx = SelectionContext::from_scene(&scene);
        let q = query(
            OperatorKind::ModifiersConstraints,
            TargetKind::Objects,
            ScopeKind::Selected,
        );

        let sel = resolve(&q, &scene, &ctx).unwrap();
        assert_eq!(sel.targets, vec![RenameTarget::Object(0)]);
        assert_eq!(sel.data, DataKind::Modifiers);
    }

    #[test]
    fn test_all_objects_scope() {
        let scene = test_scene();
        let ctx = SelectionContext::from_scene(&scene);
        let q = query(
            OperatorKind::ModifiersConstraints,
            TargetKind::Objects,
            ScopeKind::All,
        );

        let sel = resolve(&q, &scene, &ctx).unwrap();
        assert_eq!(sel.targets.len(), 3);
    }

    #[test]
    fn test_empty_selection_aborts() {
        let mut scene = test_scene();
        scene.objects[0].selected = false;
        let ctx = SelectionContext::from_scene(&scene);
        let q = query(
            OperatorKind::ModifiersConstraints,
            TargetKind::Objects,
            ScopeKind::Selected,
        );

        assert_eq!(
            resolve(&q, &scene, &ctx),
            Err(ScopeAbort::NoObjectsSelected)
        );
    }

    #[test]
    fn test_selected_bones_need_selected_armature() {
        // Rig is not selected, so its selected bone is out of scope
        let scene = test_scene();
        let ctx = SelectionContext::from_scene(&scene);
        let q = query(
            OperatorKind::ModifiersConstraints,
            TargetKind::Bones,
            ScopeKind::Selected,
        );

        assert_eq!(resolve(&q, &scene, &ctx), Err(ScopeAbort::NoBonesSelected));
    }

    #[test]
    fn test_selected_bones_of_selected_armature() {
        let mut scene = test_scene();
        scene.objects[1].selected = true;
        let ctx = SelectionContext::from_scene(&scene);
        let q = query(
            OperatorKind::ModifiersConstraints,
            TargetKind::Bones,
            ScopeKind::Selected,
        );

        let sel = resolve(&q, &scene, &ctx).unwrap();
        assert_eq!(sel.targets, vec![RenameTarget::Bone { object: 1, bone: 0 }]);
        // Bones force the data kind to constraints
        assert_eq!(sel.data, DataKind::Constraints);
    }

    #[test]
    fn test_all_bones_uses_active_armature() {
        let scene = test_scene();
        let ctx = SelectionContext::from_scene(&scene);
        let q = query(
            OperatorKind::ModifiersConstraints,
            TargetKind::Bones,
            ScopeKind::All,
        );

        let sel = resolve(&q, &scene, &ctx).unwrap();
        assert_eq!(
            sel.targets,
            vec![
                RenameTarget::Bone { object: 1, bone: 0 },
                RenameTarget::Bone { object: 1, bone: 1 },
            ]
        );
        assert_eq!(sel.data, DataKind::Constraints);
    }

    #[test]
    fn test_all_bones_without_active_armature_aborts() {
        let mut scene = test_scene();
        scene.active = Some(0); // active is the mesh
        let ctx = SelectionContext::from_scene(&scene);
        let q = query(
            OperatorKind::ModifiersConstraints,
            TargetKind::Bones,
            ScopeKind::All,
        );

        assert_eq!(resolve(&q, &scene, &ctx), Err(ScopeAbort::NoActiveArmature));

        scene.active = None;
        let ctx = SelectionContext::from_scene(&scene);
        assert_eq!(resolve(&q, &scene, &ctx), Err(ScopeAbort::NoActiveArmature));
    }

    #[test]
    fn test_vertex_groups_selected_scope() {
        let scene = test_scene();
        let ctx = SelectionContext::from_scene(&scene);
        let q = query(
            OperatorKind::VertexGroups,
            TargetKind::Objects,
            ScopeKind::Selected,
        );

        let sel = resolve(&q, &scene, &ctx).unwrap();
        assert_eq!(sel.targets, vec![RenameTarget::Object(0)]);
    }

    #[test]
    fn test_vertex_groups_empty_scene_aborts() {
        let scene = Scene::new();
        let ctx = SelectionContext::from_scene(&scene);
        let q = query(
            OperatorKind::VertexGroups,
            TargetKind::Objects,
            ScopeKind::All,
        );

        assert_eq!(resolve(&q, &scene, &ctx), Err(ScopeAbort::EmptyScene));
    }

    #[test]
    fn test_resolution_does_not_mutate_scene() {
        let scene = test_scene();
        let before = scene.clone();
        let ctx = SelectionContext::from_scene(&scene);
        let q = query(
            OperatorKind::ModifiersConstraints,
            TargetKind::Bones,
            ScopeKind::All,
        );

        let _ = resolve(&q, &scene, &ctx);
        assert_eq!(scene, before);
    }
}
