// Dialog and application state tests
//
// The rename dialog's conditional field layout is pure state logic, so it is
// tested here without a terminal.

use rigrename::app::{AppMode, AppState, DialogField, DialogState};
use rigrename::scene::Scene;
use rigrename::types::{DataKind, OperationKind, OperatorKind, ScopeKind, TargetKind};

#[test]
fn test_default_dialog_fields() {
    let dialog = DialogState::new();
    // Modifiers/constraints on objects with find & replace
    assert_eq!(
        dialog.visible_fields(),
        vec![
            DialogField::Operator,
            DialogField::Target,
            DialogField::Data,
            DialogField::Scope,
            DialogField::Operation,
            DialogField::Find,
            DialogField::Replace,
            DialogField::ExactMatch,
        ]
    );
}

#[test]
fn test_bones_hide_data_field_and_force_constraints() {
    let mut dialog = DialogState::new();
    dialog.focus = 1; // Target
    assert_eq!(dialog.focused_field(), DialogField::Target);

    dialog.cycle_focused(true); // Objects -> Bones

    assert_eq!(dialog.target, TargetKind::Bones);
    assert_eq!(dialog.data, DataKind::Constraints);
    assert!(!dialog.visible_fields().contains(&DialogField::Data));
    assert_eq!(
        dialog.bones_info(),
        Some("Data type is set to constraints for bones.")
    );
}

#[test]
fn test_bones_all_scope_warning() {
    let mut dialog = DialogState::new();
    dialog.target = TargetKind::Bones;
    dialog.scope = ScopeKind::All;

    assert_eq!(
        dialog.bones_scope_warning(),
        Some("Only rename all bones on active armature.")
    );

    dialog.scope = ScopeKind::Selected;
    assert_eq!(dialog.bones_scope_warning(), None);
}

#[test]
fn test_vertex_groups_hide_target_and_data() {
    let mut dialog = DialogState::new();
    dialog.operator = OperatorKind::VertexGroups;

    let fields = dialog.visible_fields();
    assert!(!fields.contains(&DialogField::Target));
    assert!(!fields.contains(&DialogField::Data));
    assert!(fields.contains(&DialogField::Scope));
}

#[test]
fn test_operation_switches_input_fields() {
    let mut dialog = DialogState::new();

    dialog.operation = OperationKind::Prefix;
    let fields = dialog.visible_fields();
    assert!(fields.contains(&DialogField::Prefix));
    assert!(!fields.contains(&DialogField::Find));
    assert!(!fields.contains(&DialogField::ExactMatch));

    dialog.operation = OperationKind::Suffix;
    let fields = dialog.visible_fields();
    assert!(fields.contains(&DialogField::Suffix));
    assert!(!fields.contains(&DialogField::Replace));
}

#[test]
fn test_focus_wraps_both_ways() {
    let mut dialog = DialogState::new();
    let len = dialog.visible_fields().len();

    dialog.focus_prev();
    assert_eq!(dialog.focus, len - 1);
    dialog.focus_next();
    assert_eq!(dialog.focus, 0);
}

#[test]
fn test_focus_stays_valid_when_fields_shrink() {
    let mut dialog = DialogState::new();

    // Switching operator to vertex groups shrinks the field list
    dialog.cycle_focused(true);
    assert_eq!(dialog.operator, OperatorKind::VertexGroups);
    assert!(dialog.focus < dialog.visible_fields().len());

    // Switching the operation away from find & replace shrinks it further
    dialog.focus = dialog
        .visible_fields()
        .iter()
        .position(|f| *f == DialogField::Operation)
        .unwrap();
    dialog.cycle_focused(true);
    assert_eq!(dialog.operation, OperationKind::Prefix);
    assert!(dialog.focus < dialog.visible_fields().len());
}

#[test]
fn test_text_editing_targets_focused_field() {
    let mut dialog = DialogState::new();
    let find_pos = dialog
        .visible_fields()
        .iter()
        .position(|f| *f == DialogField::Find)
        .unwrap();
    dialog.focus = find_pos;

    dialog.insert_char('B');
    dialog.insert_char('e');
    dialog.insert_char('v');
    assert_eq!(dialog.find, "Bev");

    dialog.backspace();
    assert_eq!(dialog.find, "Be");
    assert!(dialog.replace.is_empty());
}

#[test]
fn test_exact_match_toggles() {
    let mut dialog = DialogState::new();
    let pos = dialog
        .visible_fields()
        .iter()
        .position(|f| *f == DialogField::ExactMatch)
        .unwrap();
    dialog.focus = pos;

    assert!(!dialog.exact_match);
    dialog.cycle_focused(true);
    assert!(dialog.exact_match);
    dialog.cycle_focused(false);
    assert!(!dialog.exact_match);
}

#[test]
fn test_dialog_produces_matching_directive_and_query() {
    let mut dialog = DialogState::new();
    dialog.operator = OperatorKind::VertexGroups;
    dialog.scope = ScopeKind::All;
    dialog.operation = OperationKind::FindReplace;
    dialog.find = "Arm".to_string();
    dialog.replace = "Leg".to_string();
    dialog.exact_match = true;

    let directive = dialog.directive();
    assert_eq!(directive.operation, OperationKind::FindReplace);
    assert_eq!(directive.find, "Arm");
    assert_eq!(directive.replace, "Leg");
    assert!(directive.exact_match);

    let query = dialog.query();
    assert_eq!(query.operator, OperatorKind::VertexGroups);
    assert_eq!(query.scope, ScopeKind::All);
}

#[test]
fn test_app_state_navigation_and_selection() {
    let mut state = AppState::new(Scene::demo(), None);
    assert_eq!(state.mode, AppMode::ObjectList);
    assert_eq!(state.list_selection, 0);

    state.move_down();
    assert_eq!(state.list_selection, 1);
    state.move_down();
    state.move_down(); // clamped at the last object
    assert_eq!(state.list_selection, 2);

    state.toggle_selected();
    assert!(state.scene.objects[2].selected);
    assert!(state.dirty);

    state.set_active();
    assert_eq!(state.scene.active, Some(2));
}

#[test]
fn test_dialog_open_and_close() {
    let mut state = AppState::new(Scene::demo(), None);

    state.open_dialog();
    assert_eq!(state.mode, AppMode::RenameDialog);
    assert!(state.dialog.is_some());

    state.close_dialog();
    assert_eq!(state.mode, AppMode::ObjectList);
    assert!(state.dialog.is_none());
}
