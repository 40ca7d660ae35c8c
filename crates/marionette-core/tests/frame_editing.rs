use marionette_core::catalog::{attack_animation, humanoid_skeleton, walk_animation};
use marionette_core::editing::{
    copy_frame, effective_transform, mirror_frame, paste_frame, reset_all_bones, reset_bone,
    set_bone_transform, set_frame_duration, FrameSnapshot, MirrorTable,
};
use marionette_core::{Animation, Frame, Transform2D, Vec2};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn keyed(x: f32, y: f32, rotation: f32) -> Transform2D {
    Transform2D::new(Vec2::new(x, y), rotation, Vec2::ONE)
}

fn mk_clip(frames: Vec<Frame>) -> Animation {
    Animation {
        id: "clip_test".to_string(),
        name: "Test Clip".to_string(),
        skeleton_id: "humanoid_skeleton".to_string(),
        r#loop: true,
        frames,
    }
}

fn mk_frame(index: usize, bones: &[(&str, Transform2D)]) -> Frame {
    Frame {
        index,
        duration: 100,
        bones: bones
            .iter()
            .map(|(bone_id, transform)| (bone_id.to_string(), *transform))
            .collect(),
    }
}

/// it should deep-copy a frame so later edits stay local
#[test]
fn copy_is_independent_of_the_source() {
    let mut walk = walk_animation();
    let snapshot = copy_frame(&walk, 0);
    assert_eq!(snapshot.len(), 4);

    set_bone_transform(&mut walk, 0, "arm_left", keyed(-15.0, -10.0, 45.0));
    approx(snapshot["arm_left"].rotation, -20.0, 1e-6);

    assert!(copy_frame(&walk, 99).is_empty());
}

/// it should replace the target frame's pose wholesale on paste
#[test]
fn paste_replaces_the_pose() {
    let mut walk = walk_animation();
    let mut snapshot = FrameSnapshot::default();
    snapshot.insert("head".to_string(), keyed(0.0, -32.0, 15.0));

    paste_frame(&mut walk, 1, &snapshot);
    assert_eq!(walk.frames[1].bones.len(), 1);
    assert!(walk.frames[1].bones.contains_key("head"));

    // Out of range: nothing happens.
    let before = walk.clone();
    paste_frame(&mut walk, 99, &snapshot);
    assert_eq!(walk, before);
}

/// it should swap paired bones and negate x and rotation on mirror
#[test]
fn mirror_swaps_and_negates() {
    let mut clip = mk_clip(vec![mk_frame(
        0,
        &[
            (
                "arm_left",
                Transform2D::new(Vec2::new(-15.0, -10.0), -20.0, Vec2::new(2.0, 1.0)),
            ),
            ("head", keyed(1.0, 2.0, 30.0)),
        ],
    )]);
    mirror_frame(&mut clip, 0, &MirrorTable::humanoid());

    let bones = &clip.frames[0].bones;
    assert_eq!(bones.len(), 2);
    // The left override moved to the right slot; the old slot is gone.
    assert!(!bones.contains_key("arm_left"));
    approx(bones["arm_right"].position.x, 15.0, 1e-6);
    approx(bones["arm_right"].position.y, -10.0, 1e-6);
    approx(bones["arm_right"].rotation, 20.0, 1e-6);
    assert_eq!(bones["arm_right"].scale, Vec2::new(2.0, 1.0));
    // Unpaired bones mirror in place.
    approx(bones["head"].position.x, -1.0, 1e-6);
    approx(bones["head"].position.y, 2.0, 1e-6);
    approx(bones["head"].rotation, -30.0, 1e-6);
}

/// it should restore an asymmetric pose after two mirrors
#[test]
fn mirror_twice_is_identity() {
    let mut attack = attack_animation();
    let before = attack.frames[1].bones.clone();

    let table = MirrorTable::humanoid();
    mirror_frame(&mut attack, 1, &table);
    assert_ne!(attack.frames[1].bones, before);
    mirror_frame(&mut attack, 1, &table);
    assert_eq!(attack.frames[1].bones, before);
}

/// it should map unpaired bones onto themselves
#[test]
fn mirror_table_falls_back_to_identity() {
    let table = MirrorTable::humanoid();
    assert_eq!(table.mirror_of("arm_left"), "arm_right");
    assert_eq!(table.mirror_of("foot_right"), "foot_left");
    assert_eq!(table.mirror_of("torso"), "torso");

    let fish = MirrorTable::from_pairs([("fin_left", "fin_right")]);
    assert_eq!(fish.mirror_of("fin_left"), "fin_right");
    assert_eq!(fish.mirror_of("fin_right"), "fin_left");
    assert_eq!(fish.mirror_of("tail"), "tail");
}

/// it should key the bind pose when resetting one bone
#[test]
fn reset_bone_materializes_the_bind_pose() {
    let skeleton = humanoid_skeleton();
    let mut walk = walk_animation();

    reset_bone(&mut walk, 0, &skeleton, "arm_left");
    let bones = &walk.frames[0].bones;
    assert_eq!(bones.len(), 4);
    assert_eq!(bones["arm_left"], skeleton.bones["arm_left"].local_transform);
    // Neighbors keep their overrides.
    approx(bones["arm_right"].rotation, 20.0, 1e-6);

    // Unknown bones are ignored.
    reset_bone(&mut walk, 0, &skeleton, "tail");
    assert_eq!(walk.frames[0].bones.len(), 4);
    assert!(!walk.frames[0].bones.contains_key("tail"));
}

/// it should clear every override when resetting a frame
#[test]
fn reset_all_empties_the_frame() {
    let mut walk = walk_animation();
    reset_all_bones(&mut walk, 0);
    assert!(walk.frames[0].bones.is_empty());
    // Other frames are untouched.
    assert_eq!(walk.frames[1].bones.len(), 5);
}

/// it should merge single-bone writes without touching neighbors
#[test]
fn set_bone_transform_merges() {
    let mut walk = walk_animation();
    set_bone_transform(&mut walk, 1, "head", keyed(0.0, -32.0, -10.0));

    let bones = &walk.frames[1].bones;
    assert_eq!(bones.len(), 6);
    approx(bones["head"].rotation, -10.0, 1e-6);
    approx(bones["torso"].position.y, -22.0, 1e-6);
}

/// it should retime frames in place
#[test]
fn set_frame_duration_retimes() {
    let mut walk = walk_animation();
    set_frame_duration(&mut walk, 2, 250);
    assert_eq!(walk.frames[2].duration, 250);
    assert_eq!(walk.total_duration(), 550);

    set_frame_duration(&mut walk, 9, 10);
    assert_eq!(walk.total_duration(), 550);
}

/// it should read the override if keyed, else the bind pose
#[test]
fn effective_transform_reads_two_tiers() {
    let skeleton = humanoid_skeleton();
    let walk = walk_animation();

    let arm = effective_transform(&walk, 0, &skeleton, "arm_left");
    assert_eq!(arm, Some(keyed(-15.0, -10.0, -20.0)));

    let head = effective_transform(&walk, 0, &skeleton, "head");
    assert_eq!(head, Some(skeleton.bones["head"].local_transform));

    assert_eq!(effective_transform(&walk, 0, &skeleton, "ghost"), None);

    // Out-of-range frames fall back to the bind pose too.
    let past = effective_transform(&walk, 99, &skeleton, "arm_left");
    assert_eq!(past, Some(skeleton.bones["arm_left"].local_transform));
}
