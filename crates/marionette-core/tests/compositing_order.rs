use marionette_core::catalog::{default_character, humanoid_skeleton, standard_parts};
use marionette_core::compositing::bone_category;
use marionette_core::{
    build_draw_list, resolve_world_transforms, BoneOverrides, PartCategory, Transform2D, Vec2,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// it should order items back to front by combined depth
#[test]
fn draw_list_sorts_by_combined_z() {
    let skeleton = humanoid_skeleton();
    let worlds = resolve_world_transforms(&skeleton, &BoneOverrides::new());
    let character = default_character();
    let catalog = standard_parts();

    let list = build_draw_list(&skeleton, &worlds, &character.parts, &catalog);
    assert_eq!(list.len(), 10);

    let zs: Vec<i32> = list.iter().map(|item| item.z_index).collect();
    assert_eq!(zs, vec![3, 3, 4, 4, 5, 6, 6, 7, 7, 10]);
}

/// it should break depth ties by assignment order
#[test]
fn equal_depths_keep_assignment_order() {
    let skeleton = humanoid_skeleton();
    let worlds = resolve_world_transforms(&skeleton, &BoneOverrides::new());
    let character = default_character();
    let catalog = standard_parts();

    let list = build_draw_list(&skeleton, &worlds, &character.parts, &catalog);
    let order: Vec<&str> = list.iter().map(|item| item.bone_id.as_str()).collect();
    // Within each depth, items appear in the order the parts were assigned:
    // arms before hands, legs before feet.
    assert_eq!(
        order,
        vec![
            "arm_left",
            "hand_left",
            "leg_left",
            "foot_left",
            "torso",
            "leg_right",
            "foot_right",
            "arm_right",
            "hand_right",
            "head",
        ]
    );
}

/// it should place items at the bone's world position plus the part offset
#[test]
fn items_add_the_part_offset_in_world_axes() {
    let skeleton = humanoid_skeleton();
    let catalog = standard_parts();
    let mut character = default_character();
    character.assign_part("hand_right", "weapon_sword");

    // Bind pose: the sword offset lands relative to the resting hand.
    let worlds = resolve_world_transforms(&skeleton, &BoneOverrides::new());
    let list = build_draw_list(&skeleton, &worlds, &character.parts, &catalog);
    let sword = match list.iter().find(|item| item.part.id == "weapon_sword") {
        Some(item) => item.clone(),
        None => panic!("no draw item for the sword"),
    };
    approx(sword.position.x, 23.0, 1e-4);
    approx(sword.position.y, -20.0, 1e-4);
    assert_eq!(sword.z_index, 9);

    // With the arm rotated the hand moves, but the offset itself does not
    // rotate with the bone.
    let mut overrides = BoneOverrides::new();
    overrides.insert(
        "arm_right".to_string(),
        Transform2D::new(Vec2::new(15.0, -10.0), 90.0, Vec2::ONE),
    );
    let rotated = resolve_world_transforms(&skeleton, &overrides);
    let list = build_draw_list(&skeleton, &rotated, &character.parts, &catalog);
    let sword = match list.iter().find(|item| item.part.id == "weapon_sword") {
        Some(item) => item.clone(),
        None => panic!("no draw item for the sword"),
    };
    approx(sword.position.x, 3.0, 1e-3);
    approx(sword.position.y, -40.0, 1e-3);
    approx(sword.rotation, 90.0, 1e-4);
}

/// it should skip assignments that do not resolve end to end
#[test]
fn unresolved_assignments_are_skipped() {
    let skeleton = humanoid_skeleton();
    let worlds = resolve_world_transforms(&skeleton, &BoneOverrides::new());
    let catalog = standard_parts();
    let mut character = default_character();
    character.assign_part("ghost", "head_basic");
    character.assign_part("torso", "no_such_part");

    let list = build_draw_list(&skeleton, &worlds, &character.parts, &catalog);
    assert_eq!(list.len(), 9);
    assert!(!list.iter().any(|item| item.bone_id == "ghost"));
    assert!(!list.iter().any(|item| item.bone_id == "torso"));
}

/// it should offer parts from the bone's family and its attach point
#[test]
fn compatibility_covers_family_and_attach_point() {
    let catalog = standard_parts();

    let hand: Vec<&str> = catalog
        .compatible_with("hand_right")
        .iter()
        .map(|part| part.id.as_str())
        .collect();
    // Hand family parts, both weapons (attach point hand_right), and the
    // shield (attach point hand_left, same family).
    assert_eq!(
        hand,
        vec!["hand_basic", "hand_glove", "weapon_sword", "weapon_staff", "shield"]
    );

    let arm: Vec<&str> = catalog
        .compatible_with("arm_left")
        .iter()
        .map(|part| part.id.as_str())
        .collect();
    assert_eq!(arm, vec!["arm_basic", "arm_armored"]);

    let head: Vec<&str> = catalog
        .compatible_with("head")
        .iter()
        .map(|part| part.id.as_str())
        .collect();
    assert_eq!(head, vec!["head_basic", "head_helmet", "head_wizard"]);
}

/// it should strip side suffixes down to the bone family
#[test]
fn bone_category_strips_sides() {
    assert_eq!(bone_category("arm_left"), "arm");
    assert_eq!(bone_category("hand_right"), "hand");
    assert_eq!(bone_category("foot_right"), "foot");
    assert_eq!(bone_category("torso"), "torso");
}

/// it should look up parts by id and by category
#[test]
fn catalog_lookups() {
    let catalog = standard_parts();
    assert_eq!(catalog.len(), 17);
    assert_eq!(catalog.get("weapon_sword").map(|p| p.name.as_str()), Some("Iron Sword"));
    assert!(catalog.get("no_such_part").is_none());
    assert_eq!(catalog.in_category(PartCategory::Weapon).len(), 2);
    assert_eq!(catalog.in_category(PartCategory::Head).len(), 3);
    assert_eq!(catalog.in_category(PartCategory::Accessory).len(), 1);
}

/// it should serialize categories lowercase and the catalog as a flat list
#[test]
fn catalog_serde_shapes() {
    let catalog = standard_parts();

    let value = serde_json::to_value(&catalog).unwrap();
    assert!(value.is_array());
    assert_eq!(value.as_array().map(Vec::len), Some(17));

    assert_eq!(serde_json::to_value(PartCategory::Head).unwrap(), serde_json::json!("head"));

    let sword = serde_json::to_value(catalog.get("weapon_sword").unwrap()).unwrap();
    assert_eq!(sword["attachPoint"], serde_json::json!("hand_right"));
    assert_eq!(sword["zIndexModifier"], serde_json::json!(2));
    assert_eq!(sword["category"], serde_json::json!("weapon"));
}
