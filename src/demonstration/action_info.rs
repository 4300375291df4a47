// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the ActionInfo type.
use std::convert::TryInto;

use nalgebra::Isometry3;
use serde::Deserialize;
use serde::Serialize;

use crate::demonstration::arm::{Arm, ArmDesignator};
use crate::demonstration::naming::ActionNaming;
use crate::exception::{TaskParserException, TaskParserResult};
use crate::utils::identity_pose;

/// Describes which action was performed and by which arm.
///
/// This information is needed to decide which skill representation to use and to build
/// the task graph later on.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ActionInfo {
    /// Arm which performed the action.
    pub arm: Arm,
    /// Base name of the action, e.g. "pick".
    pub name: String,
    /// Identifier of the object the action was performed on.
    pub object_acted_on: Option<String>,
    /// Identifier of the object held while performing the action.
    pub object_in_hand: Option<String>,
    /// End-effector pose at which the action occurred.
    pub pose: Isometry3<f64>,
    /// Gripper opening width, if it was recorded. Unit: \[m\].
    pub gripper_state: Option<f64>,
}

impl ActionInfo {
    /// Creates a new action.
    /// # Arguments
    /// * `arm` - an [`Arm`], one of the aliases "left", "right" or "both" (any case) or an arm code.
    /// * `name` - base name of the action.
    /// * `object_acted_on` - target object, if any.
    /// * `object_in_hand` - held object, if any.
    /// * `pose` - pose at which the action occurred.
    /// # Errors
    /// * [`InvalidArmError`](`crate::exception::TaskParserException::InvalidArmError`) if `arm` is not LEFT, RIGHT or BOTH.
    pub fn new<A>(
        arm: A,
        name: impl Into<String>,
        object_acted_on: Option<&str>,
        object_in_hand: Option<&str>,
        pose: Isometry3<f64>,
    ) -> TaskParserResult<ActionInfo>
    where
        A: TryInto<Arm>,
        TaskParserException: From<A::Error>,
    {
        Ok(ActionInfo {
            arm: arm.try_into()?,
            name: name.into(),
            object_acted_on: object_acted_on.map(str::to_string),
            object_in_hand: object_in_hand.map(str::to_string),
            pose,
            gripper_state: None,
        })
    }

    /// Decodes an action from JSON.
    ///
    /// The arm may be given as a code or as one of the aliases.
    /// # Errors
    /// * [`InvalidArmError`](`crate::exception::TaskParserException::InvalidArmError`) if the arm is not LEFT, RIGHT or BOTH.
    /// * [`DeserializationError`](`crate::exception::TaskParserException::DeserializationError`) if the JSON is malformed.
    pub fn from_json(json: &str) -> TaskParserResult<ActionInfo> {
        serde_json::from_str::<RawActionInfo>(json)?.into_action()
    }

    /// Attaches the recorded gripper opening width.
    pub fn with_gripper_state(mut self, gripper_state: f64) -> Self {
        self.gripper_state = Some(gripper_state);
        self
    }

    /// Canonical name of this action under the given naming policy.
    pub fn full_name<N: ActionNaming + ?Sized>(&self, naming: &N) -> String {
        naming.action_name(self)
    }
}

/// An action as it is recorded, with the arm designator not yet validated.
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct RawActionInfo {
    arm: ArmDesignator,
    name: String,
    #[serde(default)]
    object_acted_on: Option<String>,
    #[serde(default)]
    object_in_hand: Option<String>,
    #[serde(default = "identity_pose")]
    pose: Isometry3<f64>,
    #[serde(default)]
    gripper_state: Option<f64>,
}

impl RawActionInfo {
    /// Builds the [`ActionInfo`], validating the arm designator.
    pub(crate) fn into_action(self) -> TaskParserResult<ActionInfo> {
        let mut action = ActionInfo::new(
            self.arm,
            self.name,
            self.object_acted_on.as_deref(),
            self.object_in_hand.as_deref(),
            self.pose,
        )?;
        action.gripper_state = self.gripper_state;
        Ok(action)
    }
}
