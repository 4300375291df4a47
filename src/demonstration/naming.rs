// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the naming policies which turn actions into canonical action names.
use serde::Deserialize;
use serde::Serialize;

use crate::demonstration::action_info::ActionInfo;

#[cfg(test)]
use mockall::automock;

/// Computes the canonical name of an action.
///
/// The canonical name is used to merge or distinguish semantically identical actions
/// across demonstrations. Implementations must be pure: the same action always yields
/// the same name.
#[cfg_attr(test, automock)]
pub trait ActionNaming {
    fn action_name(&self, action: &ActionInfo) -> String;
}

/// Available naming policies for a [`TaskParser`](`crate::TaskParser`)
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NamingStyle {
    /// "pick(block_red)" and "pick(block_blue)" are different actions.
    Unique,
    /// All actions with the same base name are the same action.
    Same,
}

impl Default for NamingStyle {
    fn default() -> Self {
        NamingStyle::Unique
    }
}

impl ActionNaming for NamingStyle {
    fn action_name(&self, action: &ActionInfo) -> String {
        match self {
            NamingStyle::Same => action.name.clone(),
            NamingStyle::Unique => match &action.object_acted_on {
                Some(object) => format!("{}({})", action.name, object),
                None => format!("{}()", action.name),
            },
        }
    }
}
