#![allow(dead_code)]
//! Bundled starter content: the humanoid rig, its part library, the stock
//! clips and the default character. Tests and demos build on these instead
//! of hand-rolling rigs; applications can ignore them entirely.

use uuid::Uuid;

use crate::character::{Character, PartAssignments};
use crate::compositing::{Part, PartCatalog, PartCategory};
use crate::skeleton::{Bone, Skeleton};
use crate::timeline::{Animation, Frame};
use crate::transform::{Transform2D, Vec2};

/// Skeleton id shared by everything in this module.
pub const HUMANOID_SKELETON_ID: &str = "humanoid_skeleton";

fn bone(id: &str, parent: Option<&str>, children: &[&str], position: Vec2, z_index: i32) -> Bone {
    Bone {
        id: id.to_string(),
        parent: parent.map(str::to_string),
        children: children.iter().map(|child| child.to_string()).collect(),
        local_transform: Transform2D::new(position, 0.0, Vec2::ONE),
        z_index,
    }
}

/// The 11-bone humanoid rig: root, torso, head, paired arms/hands/legs/feet.
/// Left limbs sit behind the torso (lower z), right limbs in front.
pub fn humanoid_skeleton() -> Skeleton {
    let bones = [
        bone("root", None, &["torso"], Vec2::ZERO, 0),
        bone(
            "torso",
            Some("root"),
            &["head", "arm_left", "arm_right", "leg_left", "leg_right"],
            Vec2::new(0.0, -20.0),
            5,
        ),
        bone("head", Some("torso"), &[], Vec2::new(0.0, -30.0), 10),
        bone(
            "arm_left",
            Some("torso"),
            &["hand_left"],
            Vec2::new(-15.0, -10.0),
            3,
        ),
        bone("hand_left", Some("arm_left"), &[], Vec2::new(0.0, 20.0), 3),
        bone(
            "arm_right",
            Some("torso"),
            &["hand_right"],
            Vec2::new(15.0, -10.0),
            7,
        ),
        bone("hand_right", Some("arm_right"), &[], Vec2::new(0.0, 20.0), 7),
        bone(
            "leg_left",
            Some("torso"),
            &["foot_left"],
            Vec2::new(-8.0, 15.0),
            4,
        ),
        bone("foot_left", Some("leg_left"), &[], Vec2::new(0.0, 20.0), 4),
        bone(
            "leg_right",
            Some("torso"),
            &["foot_right"],
            Vec2::new(8.0, 15.0),
            6,
        ),
        bone("foot_right", Some("leg_right"), &[], Vec2::new(0.0, 20.0), 6),
    ];
    Skeleton {
        id: HUMANOID_SKELETON_ID.to_string(),
        name: "Humanoid".to_string(),
        bones: bones.into_iter().map(|b| (b.id.clone(), b)).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn part(
    id: &str,
    name: &str,
    category: PartCategory,
    color: &str,
    attach_point: &str,
    offset: Vec2,
    z_index_modifier: i32,
    width: f32,
    height: f32,
) -> Part {
    Part {
        id: id.to_string(),
        name: name.to_string(),
        category,
        color: color.to_string(),
        attach_point: attach_point.to_string(),
        offset,
        z_index_modifier,
        width,
        height,
    }
}

/// The standard 17-part library covering every humanoid slot plus weapons
/// and an accessory.
pub fn standard_parts() -> PartCatalog {
    use PartCategory::*;
    PartCatalog::from_parts(vec![
        part("head_basic", "Basic Head", Head, "#FFD93D", "head", Vec2::ZERO, 0, 32.0, 32.0),
        part("head_helmet", "Knight Helmet", Head, "#6B7280", "head", Vec2::ZERO, 1, 36.0, 36.0),
        part("head_wizard", "Wizard Hat", Head, "#8B5CF6", "head", Vec2::new(0.0, -8.0), 2, 40.0, 48.0),
        part("torso_basic", "Basic Torso", Torso, "#60A5FA", "torso", Vec2::ZERO, 0, 40.0, 48.0),
        part("torso_armor", "Plate Armor", Torso, "#9CA3AF", "torso", Vec2::ZERO, 0, 44.0, 52.0),
        part("torso_robe", "Wizard Robe", Torso, "#7C3AED", "torso", Vec2::ZERO, 0, 42.0, 56.0),
        part("arm_basic", "Basic Arm", Arm, "#FFD93D", "arm_left", Vec2::ZERO, 0, 12.0, 24.0),
        part("arm_armored", "Armored Arm", Arm, "#9CA3AF", "arm_left", Vec2::ZERO, 0, 14.0, 26.0),
        part("hand_basic", "Basic Hand", Hand, "#FFD93D", "hand_left", Vec2::ZERO, 0, 10.0, 12.0),
        part("hand_glove", "Gauntlet", Hand, "#6B7280", "hand_left", Vec2::ZERO, 0, 12.0, 14.0),
        part("weapon_sword", "Iron Sword", Weapon, "#D1D5DB", "hand_right", Vec2::new(8.0, -10.0), 2, 12.0, 48.0),
        part("weapon_staff", "Magic Staff", Weapon, "#8B5CF6", "hand_right", Vec2::new(6.0, -20.0), 2, 8.0, 64.0),
        part("leg_basic", "Basic Leg", Leg, "#60A5FA", "leg_left", Vec2::ZERO, 0, 14.0, 28.0),
        part("leg_armored", "Armored Leg", Leg, "#9CA3AF", "leg_left", Vec2::ZERO, 0, 16.0, 30.0),
        part("foot_basic", "Basic Foot", Foot, "#374151", "foot_left", Vec2::ZERO, 0, 14.0, 10.0),
        part("foot_boot", "Steel Boot", Foot, "#6B7280", "foot_left", Vec2::ZERO, 0, 16.0, 12.0),
        part("shield", "Round Shield", Accessory, "#B45309", "hand_left", Vec2::new(-10.0, -5.0), 3, 28.0, 32.0),
    ])
}

fn keyed(position: Vec2, rotation: f32) -> Transform2D {
    Transform2D::new(position, rotation, Vec2::ONE)
}

fn frame(index: usize, duration: u32, bones: &[(&str, Transform2D)]) -> Frame {
    Frame {
        index,
        duration,
        bones: bones
            .iter()
            .map(|(bone_id, transform)| (bone_id.to_string(), *transform))
            .collect(),
    }
}

/// Looping torso bounce, 4 frames at 200 ms.
pub fn idle_animation() -> Animation {
    Animation {
        id: "anim_idle_001".to_string(),
        name: "Idle".to_string(),
        skeleton_id: HUMANOID_SKELETON_ID.to_string(),
        r#loop: true,
        frames: vec![
            frame(0, 200, &[("torso", keyed(Vec2::new(0.0, -20.0), 0.0))]),
            frame(1, 200, &[("torso", keyed(Vec2::new(0.0, -22.0), 0.0))]),
            frame(2, 200, &[("torso", keyed(Vec2::new(0.0, -20.0), 0.0))]),
            frame(3, 200, &[("torso", keyed(Vec2::new(0.0, -22.0), 0.0))]),
        ],
    }
}

/// Looping arm/leg swing with contact poses, 4 frames at 100 ms.
pub fn walk_animation() -> Animation {
    Animation {
        id: "anim_walk_001".to_string(),
        name: "Walk Cycle".to_string(),
        skeleton_id: HUMANOID_SKELETON_ID.to_string(),
        r#loop: true,
        frames: vec![
            frame(
                0,
                100,
                &[
                    ("arm_left", keyed(Vec2::new(-15.0, -10.0), -20.0)),
                    ("arm_right", keyed(Vec2::new(15.0, -10.0), 20.0)),
                    ("leg_left", keyed(Vec2::new(-8.0, 15.0), -30.0)),
                    ("leg_right", keyed(Vec2::new(8.0, 15.0), 30.0)),
                ],
            ),
            frame(
                1,
                100,
                &[
                    ("torso", keyed(Vec2::new(0.0, -22.0), 0.0)),
                    ("arm_left", keyed(Vec2::new(-15.0, -10.0), 0.0)),
                    ("arm_right", keyed(Vec2::new(15.0, -10.0), 0.0)),
                    ("leg_left", keyed(Vec2::new(-8.0, 15.0), 0.0)),
                    ("leg_right", keyed(Vec2::new(8.0, 15.0), 0.0)),
                ],
            ),
            frame(
                2,
                100,
                &[
                    ("arm_left", keyed(Vec2::new(-15.0, -10.0), 20.0)),
                    ("arm_right", keyed(Vec2::new(15.0, -10.0), -20.0)),
                    ("leg_left", keyed(Vec2::new(-8.0, 15.0), 30.0)),
                    ("leg_right", keyed(Vec2::new(8.0, 15.0), -30.0)),
                ],
            ),
            frame(
                3,
                100,
                &[
                    ("torso", keyed(Vec2::new(0.0, -22.0), 0.0)),
                    ("arm_left", keyed(Vec2::new(-15.0, -10.0), 0.0)),
                    ("arm_right", keyed(Vec2::new(15.0, -10.0), 0.0)),
                    ("leg_left", keyed(Vec2::new(-8.0, 15.0), 0.0)),
                    ("leg_right", keyed(Vec2::new(8.0, 15.0), 0.0)),
                ],
            ),
        ],
    }
}

/// One-shot sword swing: windup, raise, strike, recover.
pub fn attack_animation() -> Animation {
    Animation {
        id: "anim_attack_001".to_string(),
        name: "Attack".to_string(),
        skeleton_id: HUMANOID_SKELETON_ID.to_string(),
        r#loop: false,
        frames: vec![
            frame(
                0,
                80,
                &[("arm_right", keyed(Vec2::new(15.0, -10.0), -90.0))],
            ),
            frame(
                1,
                60,
                &[
                    ("torso", keyed(Vec2::new(0.0, -20.0), 5.0)),
                    ("arm_right", keyed(Vec2::new(15.0, -10.0), -45.0)),
                ],
            ),
            frame(
                2,
                50,
                &[
                    ("torso", keyed(Vec2::new(0.0, -20.0), -10.0)),
                    ("arm_right", keyed(Vec2::new(15.0, -10.0), 60.0)),
                ],
            ),
            frame(
                3,
                150,
                &[("arm_right", keyed(Vec2::new(15.0, -10.0), 0.0))],
            ),
        ],
    }
}

/// The default hero: basic parts on every slot, no weapon.
pub fn default_character() -> Character {
    let mut parts = PartAssignments::default();
    for (bone_id, part_id) in [
        ("head", "head_basic"),
        ("torso", "torso_basic"),
        ("arm_left", "arm_basic"),
        ("arm_right", "arm_basic"),
        ("hand_left", "hand_basic"),
        ("hand_right", "hand_basic"),
        ("leg_left", "leg_basic"),
        ("leg_right", "leg_basic"),
        ("foot_left", "foot_basic"),
        ("foot_right", "foot_basic"),
    ] {
        parts.assign(bone_id, part_id);
    }
    Character {
        id: "char_default_001".to_string(),
        name: "Hero".to_string(),
        skeleton_id: HUMANOID_SKELETON_ID.to_string(),
        parts,
    }
}

/// A fresh looping clip with four empty 150 ms frames and a unique id.
pub fn blank_animation(name: impl Into<String>) -> Animation {
    Animation {
        id: format!("anim_{}", Uuid::new_v4()),
        name: name.into(),
        skeleton_id: HUMANOID_SKELETON_ID.to_string(),
        r#loop: true,
        frames: (0..4)
            .map(|index| Frame {
                index,
                duration: 150,
                bones: Default::default(),
            })
            .collect(),
    }
}
