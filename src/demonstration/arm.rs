// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the Arm type.
use std::convert::TryFrom;
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde::Deserialize;
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::exception::{create_invalid_arm_error, TaskParserException};

/// Describes which manipulator executed an action.
#[derive(Serialize_repr, Deserialize_repr, Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[repr(u8)]
#[derive(FromPrimitive)]
pub enum Arm {
    Left = 0,
    Right = 1,
    Both = 2,
}

impl Arm {
    /// Number of end-effector poses an action performed with this arm designation involves.
    pub fn num_poses(&self) -> usize {
        match self {
            Arm::Left | Arm::Right => 1,
            Arm::Both => 2,
        }
    }
}

impl FromStr for Arm {
    type Err = TaskParserException;

    /// Parses "left", "right" or "both" ignoring case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Arm::Left),
            "right" => Ok(Arm::Right),
            "both" => Ok(Arm::Both),
            _ => Err(create_invalid_arm_error(s)),
        }
    }
}

impl TryFrom<&str> for Arm {
    type Error = TaskParserException;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Arm {
    type Error = TaskParserException;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<i64> for Arm {
    type Error = TaskParserException;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        Arm::from_i64(value).ok_or_else(|| create_invalid_arm_error(value))
    }
}

impl Display for Arm {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Arm::Left => write!(f, "LEFT"),
            Arm::Right => write!(f, "RIGHT"),
            Arm::Both => write!(f, "BOTH"),
        }
    }
}

/// Arm designator as found in recorded demonstrations, either a code or a name.
///
/// It is decoded as is and only converted to an [`Arm`] when the action is built.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub(crate) enum ArmDesignator {
    Code(i64),
    Alias(String),
}

impl TryFrom<ArmDesignator> for Arm {
    type Error = TaskParserException;

    fn try_from(value: ArmDesignator) -> std::result::Result<Self, Self::Error> {
        match value {
            ArmDesignator::Code(code) => Arm::try_from(code),
            ArmDesignator::Alias(alias) => alias.parse(),
        }
    }
}
