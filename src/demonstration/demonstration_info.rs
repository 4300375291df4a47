// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the DemonstrationInfo type.
use serde::Deserialize;
use serde::Serialize;

use crate::demonstration::action_info::{ActionInfo, RawActionInfo};
use crate::demonstration::object_info::ObjectInfo;
use crate::exception::TaskParserResult;

/// One recorded demonstration: a timestamp series, the observed objects and the
/// sequence of discrete actions in temporal order.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct DemonstrationInfo {
    pub timestamps: Vec<f64>,
    pub objects: Vec<ObjectInfo>,
    pub actions: Vec<ActionInfo>,
}

#[derive(Deserialize)]
struct RawDemonstrationInfo {
    #[serde(default)]
    timestamps: Vec<f64>,
    #[serde(default)]
    objects: Vec<ObjectInfo>,
    actions: Vec<RawActionInfo>,
}

impl DemonstrationInfo {
    /// Decodes a demonstration from JSON.
    /// # Errors
    /// * [`DeserializationError`](`crate::exception::TaskParserException::DeserializationError`) if the JSON is malformed.
    /// * [`InvalidArmError`](`crate::exception::TaskParserException::InvalidArmError`) if an action carries an arm
    /// which is not LEFT, RIGHT or BOTH. No demonstration is returned then.
    pub fn from_json(json: &str) -> TaskParserResult<DemonstrationInfo> {
        let raw: RawDemonstrationInfo = serde_json::from_str(json)?;
        let actions = raw
            .actions
            .into_iter()
            .map(RawActionInfo::into_action)
            .collect::<TaskParserResult<Vec<ActionInfo>>>()?;
        Ok(DemonstrationInfo {
            timestamps: raw.timestamps,
            objects: raw.objects,
            actions,
        })
    }

    /// Duration between the first and the last timestamp.
    pub fn duration(&self) -> f64 {
        match (self.timestamps.first(), self.timestamps.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.,
        }
    }
}
