// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the recorded action and transition types handed to a task-graph builder.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::demonstration::action_info::ActionInfo;
use crate::demonstration::arm::Arm;

/// An action which passed the ignore-list, together with its canonical name.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RecordedAction {
    /// Canonical action name computed by the naming policy.
    pub full_name: String,
    /// Arm which performed the action.
    pub arm: Arm,
    pub object_acted_on: Option<String>,
    pub object_in_hand: Option<String>,
}

impl RecordedAction {
    pub(crate) fn new(full_name: String, action: &ActionInfo) -> Self {
        RecordedAction {
            full_name,
            arm: action.arm,
            object_acted_on: action.object_acted_on.clone(),
            object_in_hand: action.object_in_hand.clone(),
        }
    }
}

/// One observed succession of two recorded actions within a demonstration.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub arm_from: Arm,
    pub arm_to: Arm,
    /// Index of the demonstration the transition was observed in.
    pub demonstration: usize,
}

/// Observed transitions keyed by canonical action name, plus the recorded sequence of
/// every demonstration in the order they were added.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct TransitionTable {
    transitions: BTreeMap<String, Vec<Transition>>,
    sequences: Vec<Vec<RecordedAction>>,
}

impl TransitionTable {
    pub fn new() -> Self {
        TransitionTable::default()
    }

    /// Appends the sequence of one demonstration and records its transitions.
    ///
    /// Action `i` of `sequence` is taken to precede action `i + 1`.
    pub(crate) fn push_sequence(&mut self, sequence: Vec<RecordedAction>) {
        let demonstration = self.sequences.len();
        for action in sequence.iter() {
            self.transitions
                .entry(action.full_name.clone())
                .or_default();
        }
        for pair in sequence.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            self.transitions
                .entry(from.full_name.clone())
                .or_default()
                .push(Transition {
                    from: from.full_name.clone(),
                    to: to.full_name.clone(),
                    arm_from: from.arm,
                    arm_to: to.arm,
                    demonstration,
                });
        }
        self.sequences.push(sequence);
    }

    /// Transitions leaving the action `full_name`, in the order they were observed.
    pub fn from_action(&self, full_name: &str) -> Option<&[Transition]> {
        self.transitions.get(full_name).map(Vec::as_slice)
    }

    /// Canonical names of all recorded actions.
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys().map(String::as_str)
    }

    pub fn transitions(&self) -> &BTreeMap<String, Vec<Transition>> {
        &self.transitions
    }

    /// Recorded sequences, one per demonstration.
    pub fn sequences(&self) -> &[Vec<RecordedAction>] {
        &self.sequences
    }

    /// Number of recorded actions over all demonstrations.
    pub fn num_actions(&self) -> usize {
        self.sequences.iter().map(Vec::len).sum()
    }
}
