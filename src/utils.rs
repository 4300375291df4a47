// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! contains useful type definitions and conversion functions.
use nalgebra::{Isometry3, Matrix4, Rotation3, Translation3, UnitQuaternion, Vector3};

/// converts a 4x4 column-major homogenous matrix to an Isometry
pub fn array_to_isometry(array: &[f64; 16]) -> Isometry3<f64> {
    let rot = Rotation3::from_matrix(
        &Matrix4::from_column_slice(array)
            .remove_column(3)
            .remove_row(3),
    );
    Isometry3::from_parts(
        Vector3::new(array[12], array[13], array[14]).into(),
        rot.into(),
    )
}

/// Pose used when a recorded observation carries none.
pub fn identity_pose() -> Isometry3<f64> {
    Isometry3::identity()
}

/// converts a position and a quaternion given as (x, y, z, w) to an Isometry.
///
/// This is the layout of `geometry_msgs/Pose` which is what recorded demonstrations carry.
pub fn pose_to_isometry(position: &[f64; 3], orientation: &[f64; 4]) -> Isometry3<f64> {
    let rotation = UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(
        orientation[3],
        orientation[0],
        orientation[1],
        orientation[2],
    ));
    Isometry3::from_parts(
        Translation3::new(position[0], position[1], position[2]),
        rotation,
    )
}

/// converts an Isometry back to a 4x4 column-major homogenous matrix
pub fn isometry_to_array(pose: &Isometry3<f64>) -> [f64; 16] {
    let mut out = [0.; 16];
    for (i, &x) in pose.to_homogeneous().iter().enumerate() {
        out[i] = x;
    }
    out
}
