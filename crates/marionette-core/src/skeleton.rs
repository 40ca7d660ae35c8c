#![allow(dead_code)]
//! Bone hierarchy and forward kinematics.
//!
//! A skeleton is a tree of named bones, each holding a bind-pose local
//! transform. World transforms are resolved top-down in a single pass;
//! timeline samples and frame edits enter as sparse per-bone overrides.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::error::PuppetError;
use crate::transform::Transform2D;

/// Sparse per-bone local-transform overrides (timeline output, frame edits).
pub type BoneOverrides = HashMap<String, Transform2D>;

/// Resolved world transform per bone id.
pub type WorldTransformSet = HashMap<String, Transform2D>;

/// A named joint in the rig.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bone {
    pub id: String,
    /// `None` marks the root bone.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
    /// Bind pose, used wherever no override is keyed.
    #[serde(rename = "localTransform")]
    pub local_transform: Transform2D,
    /// Base paint depth; part modifiers add on top of it.
    #[serde(rename = "zIndex", default)]
    pub z_index: i32,
}

/// A complete rig: bones keyed by id, exactly one root.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Skeleton {
    pub id: String,
    pub name: String,
    pub bones: HashMap<String, Bone>,
}

impl Skeleton {
    /// The unique bone with no parent, if the rig has one.
    pub fn root(&self) -> Option<&Bone> {
        self.bones.values().find(|b| b.parent.is_none())
    }

    /// Check structural invariants: exactly one root, parent/children edges
    /// mutually consistent, every bone reachable from the root.
    pub fn validate_basic(&self) -> Result<(), PuppetError> {
        let root_count = self.bones.values().filter(|b| b.parent.is_none()).count();
        if root_count != 1 {
            return Err(PuppetError::invalid(
                "skeleton",
                format!("expected exactly one root bone, found {root_count}"),
            ));
        }
        for (key, bone) in &self.bones {
            if *key != bone.id {
                return Err(PuppetError::invalid(
                    "skeleton",
                    format!("bone map key '{key}' does not match bone id '{}'", bone.id),
                ));
            }
            if let Some(parent_id) = &bone.parent {
                let parent = self.bones.get(parent_id).ok_or_else(|| {
                    PuppetError::invalid(
                        "skeleton",
                        format!("bone '{}' names missing parent '{parent_id}'", bone.id),
                    )
                })?;
                if !parent.children.contains(&bone.id) {
                    return Err(PuppetError::invalid(
                        "skeleton",
                        format!("parent '{parent_id}' does not list child '{}'", bone.id),
                    ));
                }
            }
            for child_id in &bone.children {
                let child = self.bones.get(child_id).ok_or_else(|| {
                    PuppetError::invalid(
                        "skeleton",
                        format!("bone '{}' names missing child '{child_id}'", bone.id),
                    )
                })?;
                if child.parent.as_deref() != Some(bone.id.as_str()) {
                    return Err(PuppetError::invalid(
                        "skeleton",
                        format!("child '{child_id}' does not point back at '{}'", bone.id),
                    ));
                }
            }
        }
        // With edges mutually consistent, a cycle cannot contain the root, so
        // reachability from the root also catches cycles.
        let mut reached: HashSet<&str> = HashSet::with_capacity(self.bones.len());
        let mut stack: Vec<&str> = self.root().map(|b| b.id.as_str()).into_iter().collect();
        while let Some(id) = stack.pop() {
            if !reached.insert(id) {
                continue;
            }
            if let Some(bone) = self.bones.get(id) {
                stack.extend(bone.children.iter().map(String::as_str));
            }
        }
        if reached.len() != self.bones.len() {
            return Err(PuppetError::invalid(
                "skeleton",
                format!(
                    "{} of {} bones unreachable from the root",
                    self.bones.len() - reached.len(),
                    self.bones.len()
                ),
            ));
        }
        Ok(())
    }
}

/// Resolve world transforms for every bone reachable from the root.
///
/// Per bone the effective local transform is the override keyed under its id,
/// else the bind pose. A rig with no root resolves to an empty set; child ids
/// that name no bone are skipped. Both degradations are logged, not errors.
pub fn resolve_world_transforms(
    skeleton: &Skeleton,
    overrides: &BoneOverrides,
) -> WorldTransformSet {
    let mut worlds = WorldTransformSet::with_capacity(skeleton.bones.len());

    let Some(root) = skeleton.root() else {
        log::warn!("skeleton '{}' has no root bone", skeleton.id);
        return worlds;
    };

    let mut stack: Vec<(&str, Option<Transform2D>)> = vec![(root.id.as_str(), None)];
    while let Some((bone_id, parent_world)) = stack.pop() {
        let Some(bone) = skeleton.bones.get(bone_id) else {
            log::warn!(
                "skeleton '{}' lists unknown child bone '{bone_id}'",
                skeleton.id
            );
            continue;
        };
        // Revisit guard: malformed children lists must not loop the walk.
        if worlds.contains_key(bone_id) {
            continue;
        }

        let local = overrides
            .get(bone_id)
            .copied()
            .unwrap_or(bone.local_transform);
        let world = match parent_world {
            Some(parent) => Transform2D::compose(&parent, &local),
            None => local,
        };

        for child_id in &bone.children {
            stack.push((child_id.as_str(), Some(world)));
        }
        worlds.insert(bone.id.clone(), world);
    }

    worlds
}
