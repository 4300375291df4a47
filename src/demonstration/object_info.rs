// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the ObjectInfo type.
use nalgebra::Isometry3;
use serde::Deserialize;
use serde::Serialize;

use crate::utils::{array_to_isometry, identity_pose};

/// Describes the world observation of one object during a demonstration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ObjectInfo {
    /// Pose of the object in world frame.
    #[serde(default = "identity_pose")]
    pub pose: Isometry3<f64>,
    /// Semantic class of the object, e.g. "block".
    pub obj_class: String,
    /// Unique identifier of the object, e.g. "block_red".
    pub id: String,
    /// Human readable name.
    #[serde(default)]
    pub name: String,
}

impl ObjectInfo {
    pub fn new(
        pose: Isometry3<f64>,
        obj_class: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        ObjectInfo {
            pose,
            obj_class: obj_class.into(),
            id: id.into(),
            name: name.into(),
        }
    }

    /// Creates an observation from a 4x4 column-major homogeneous transformation.
    pub fn from_pose_array(
        pose: &[f64; 16],
        obj_class: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        ObjectInfo::new(array_to_isometry(pose), obj_class, id, name)
    }
}
