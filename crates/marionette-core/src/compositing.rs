#![allow(dead_code)]
//! Compositing: turn a resolved pose plus a character's part assignments
//! into a depth-ordered draw list. This crate stops at the ordered list;
//! rasterizing the items is the renderer's job.

use serde::{Deserialize, Serialize};

use crate::character::PartAssignments;
use crate::skeleton::{Skeleton, WorldTransformSet};
use crate::transform::Vec2;

/// Slot family a part belongs to. Families are compared against bone ids
/// with their side suffix stripped, so one `arm` part serves both arms.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PartCategory {
    Head,
    Torso,
    Arm,
    Hand,
    Leg,
    Foot,
    Weapon,
    Accessory,
}

impl PartCategory {
    pub fn name(&self) -> &'static str {
        match self {
            PartCategory::Head => "head",
            PartCategory::Torso => "torso",
            PartCategory::Arm => "arm",
            PartCategory::Hand => "hand",
            PartCategory::Leg => "leg",
            PartCategory::Foot => "foot",
            PartCategory::Weapon => "weapon",
            PartCategory::Accessory => "accessory",
        }
    }
}

/// A bone id with its side suffix stripped: `arm_left` -> `arm`.
pub fn bone_category(bone_id: &str) -> String {
    bone_id.replace("_left", "").replace("_right", "")
}

/// A visual attachment drawn at a bone's resolved world transform.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Part {
    pub id: String,
    pub name: String,
    pub category: PartCategory,
    /// Fill color as a hex string; opaque to this crate.
    pub color: String,
    /// Bone id the part is authored against.
    #[serde(rename = "attachPoint")]
    pub attach_point: String,
    /// Added to the bone's world position in world axes; the offset does not
    /// rotate with the bone.
    #[serde(default)]
    pub offset: Vec2,
    #[serde(rename = "zIndexModifier", default)]
    pub z_index_modifier: i32,
    pub width: f32,
    pub height: f32,
}

/// Ordered part library with id lookup.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PartCatalog {
    parts: Vec<Part>,
}

impl PartCatalog {
    pub fn from_parts(parts: Vec<Part>) -> Self {
        PartCatalog { parts }
    }

    pub fn push(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn get(&self, part_id: &str) -> Option<&Part> {
        self.parts.iter().find(|part| part.id == part_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Parts in the given category, in library order.
    pub fn in_category(&self, category: PartCategory) -> Vec<&Part> {
        self.parts
            .iter()
            .filter(|part| part.category == category)
            .collect()
    }

    /// Parts offerable for a bone: the category matches the bone's family,
    /// or the part's attach point names the bone or its mirror twin.
    pub fn compatible_with(&self, bone_id: &str) -> Vec<&Part> {
        let family = bone_category(bone_id);
        self.parts
            .iter()
            .filter(|part| {
                part.category.name() == family
                    || part.attach_point == bone_id
                    || bone_category(&part.attach_point) == family
            })
            .collect()
    }
}

/// One renderable: a part placed at its bone's world transform.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawItem {
    pub part: Part,
    pub bone_id: String,
    pub position: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    pub z_index: i32,
}

/// Draw items for one composited pose, ordered back to front.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub items: Vec<DrawItem>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Rebuild `list` with one item per assignment that resolves end to end:
/// the part must exist in the catalog and the bone must have a world
/// transform. Items are sorted ascending by z index; the sort is stable, so
/// equal depths keep assignment order.
pub fn build_draw_list_into(
    list: &mut DrawList,
    skeleton: &Skeleton,
    worlds: &WorldTransformSet,
    assignments: &PartAssignments,
    catalog: &PartCatalog,
) {
    list.clear();
    for (bone_id, part_id) in assignments.iter() {
        let Some(part) = catalog.get(part_id) else {
            log::warn!("assignment for bone '{bone_id}' names unknown part '{part_id}'");
            continue;
        };
        let (Some(bone), Some(world)) = (skeleton.bones.get(bone_id), worlds.get(bone_id)) else {
            log::debug!("assignment for bone '{bone_id}' has no resolved world transform");
            continue;
        };

        list.items.push(DrawItem {
            position: Vec2::new(
                world.position.x + part.offset.x,
                world.position.y + part.offset.y,
            ),
            rotation: world.rotation,
            scale: world.scale,
            z_index: bone.z_index + part.z_index_modifier,
            part: part.clone(),
            bone_id: bone_id.to_string(),
        });
    }
    list.items.sort_by_key(|item| item.z_index);
}

/// Allocating wrapper around [`build_draw_list_into`].
pub fn build_draw_list(
    skeleton: &Skeleton,
    worlds: &WorldTransformSet,
    assignments: &PartAssignments,
    catalog: &PartCatalog,
) -> DrawList {
    let mut list = DrawList::default();
    build_draw_list_into(&mut list, skeleton, worlds, assignments, catalog);
    list
}
