#![allow(dead_code)]
//! Characters: a named selection of parts over a skeleton's bones.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::compositing::{bone_category, PartCatalog, PartCategory};
use crate::skeleton::Skeleton;

const NAME_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Bone-to-part assignments in insertion order.
///
/// Serialized as a JSON object. The order doubles as the tie-break for equal
/// depths in the draw list, so it is part of the data model rather than an
/// implementation detail; a hash map would not preserve it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartAssignments {
    rows: Vec<(String, String)>,
}

impl PartAssignments {
    /// Assign a part to a bone. Reassignment keeps the bone's original slot
    /// in the order.
    pub fn assign(&mut self, bone_id: impl Into<String>, part_id: impl Into<String>) {
        let bone_id = bone_id.into();
        let part_id = part_id.into();
        match self.rows.iter_mut().find(|row| row.0 == bone_id) {
            Some(row) => row.1 = part_id,
            None => self.rows.push((bone_id, part_id)),
        }
    }

    /// Unassign a bone, returning the removed part id.
    pub fn remove(&mut self, bone_id: &str) -> Option<String> {
        let at = self.rows.iter().position(|row| row.0 == bone_id)?;
        Some(self.rows.remove(at).1)
    }

    pub fn get(&self, bone_id: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.0 == bone_id)
            .map(|row| row.1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rows
            .iter()
            .map(|(bone_id, part_id)| (bone_id.as_str(), part_id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl Serialize for PartAssignments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (bone_id, part_id) in &self.rows {
            map.serialize_entry(bone_id, part_id)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PartAssignments {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowsVisitor;

        impl<'de> Visitor<'de> for RowsVisitor {
            type Value = PartAssignments;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a map of bone id to part id")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut assignments = PartAssignments::default();
                while let Some((bone_id, part_id)) = access.next_entry::<String, String>()? {
                    assignments.assign(bone_id, part_id);
                }
                Ok(assignments)
            }
        }

        deserializer.deserialize_map(RowsVisitor)
    }
}

/// A named, skinnable puppet: which part sits on which bone of a skeleton.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub id: String,
    pub name: String,
    #[serde(rename = "skeletonId")]
    pub skeleton_id: String,
    #[serde(default)]
    pub parts: PartAssignments,
}

impl Character {
    /// Put a part on a bone, replacing whatever was there.
    pub fn assign_part(&mut self, bone_id: impl Into<String>, part_id: impl Into<String>) {
        self.parts.assign(bone_id, part_id);
    }

    /// Take the part off a bone, returning its id.
    pub fn remove_part(&mut self, bone_id: &str) -> Option<String> {
        self.parts.remove(bone_id)
    }
}

/// Roll a random character for `skeleton`: every non-root bone has an 80%
/// chance of a random part from its family, and half the time a weapon lands
/// in the right hand. The caller supplies the rng, so a seeded generator
/// reproduces the same character.
pub fn generate_character(
    skeleton: &Skeleton,
    catalog: &PartCatalog,
    rng: &mut impl Rng,
) -> Character {
    let mut parts = PartAssignments::default();

    let mut bone_ids: Vec<&str> = skeleton
        .bones
        .values()
        .filter(|bone| bone.parent.is_some())
        .map(|bone| bone.id.as_str())
        .collect();
    // Map iteration order must not leak into the rolls.
    bone_ids.sort_unstable();

    for bone_id in bone_ids {
        let family = bone_category(bone_id);
        let matching: Vec<_> = catalog
            .iter()
            .filter(|part| part.category.name() == family)
            .collect();
        if !matching.is_empty() && rng.gen_bool(0.8) {
            if let Some(part) = matching.choose(rng) {
                parts.assign(bone_id, part.id.clone());
            }
        }
    }

    if skeleton.bones.contains_key("hand_right") && rng.gen_bool(0.5) {
        let weapons = catalog.in_category(PartCategory::Weapon);
        if let Some(weapon) = weapons.choose(rng) {
            parts.assign("hand_right", weapon.id.clone());
        }
    }

    let suffix: String = (0..4)
        .map(|_| NAME_CHARS[rng.gen_range(0..NAME_CHARS.len())] as char)
        .collect();

    Character {
        id: format!("char_gen_{}", Uuid::new_v4()),
        name: format!("Generated_{suffix}"),
        skeleton_id: skeleton.id.clone(),
        parts,
    }
}
