// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the TaskParser type.
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::demonstration::action_info::ActionInfo;
use crate::demonstration::demonstration_info::DemonstrationInfo;
use crate::demonstration::naming::{ActionNaming, NamingStyle};
use crate::demonstration::object_info::ObjectInfo;
use crate::exception::{TaskParserException, TaskParserResult};
use crate::parser::class_registry::ClassRegistry;
use crate::parser::transitions::{RecordedAction, TransitionTable};

/// Default minimum action length
pub static DEFAULT_MIN_ACTION_LENGTH: usize = 5;

fn default_min_action_length() -> usize {
    DEFAULT_MIN_ACTION_LENGTH
}

/// Construction parameters of a [`TaskParser`]. Missing fields fall back to their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TaskParserConfig {
    pub naming_style: NamingStyle,
    /// Actions shorter than this are meant to be ignored. Stored, not enforced.
    #[serde(default = "default_min_action_length")]
    pub min_action_length: usize,
    /// Base action names which are skipped entirely.
    pub ignore_actions: Vec<String>,
}

impl Default for TaskParserConfig {
    fn default() -> Self {
        TaskParserConfig {
            naming_style: NamingStyle::default(),
            min_action_length: DEFAULT_MIN_ACTION_LENGTH,
            ignore_actions: Vec::new(),
        }
    }
}

impl TaskParserConfig {
    /// Decodes a configuration from JSON.
    /// # Errors
    /// * [`DeserializationError`](`crate::exception::TaskParserException::DeserializationError`) if the JSON is malformed,
    /// is not an object or contains unknown fields.
    pub fn from_json(json: &str) -> TaskParserResult<TaskParserConfig> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(TaskParserException::DeserializationError {
                message: "parser configuration must be a JSON object".to_string(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Loads demonstrations one at a time and accumulates the object classes and the action
/// transitions needed to build a task graph.
///
/// The parser only accumulates. Nothing is ever removed, and a demonstration which fails
/// to parse leaves the previously accumulated state untouched.
pub struct TaskParser<N: ActionNaming = NamingStyle> {
    naming: N,
    min_action_length: usize,
    ignore_actions: BTreeSet<String>,
    registry: ClassRegistry,
    transitions: TransitionTable,
}

impl TaskParser<NamingStyle> {
    /// Creates a new task parser.
    /// # Arguments
    /// * `naming` - Naming policy for actions. Default is [`NamingStyle::Unique`].
    /// * `min_action_length` - Actions below this length are meant to be ignored. Default is 5.
    /// * `ignore_actions` - Base action names which are skipped entirely. Default is none.
    pub fn new(
        naming: Option<NamingStyle>,
        min_action_length: Option<usize>,
        ignore_actions: Option<Vec<String>>,
    ) -> Self {
        TaskParser::with_naming(naming.unwrap_or_default(), min_action_length, ignore_actions)
    }

    /// Creates a task parser from a [`TaskParserConfig`].
    pub fn from_config(config: &TaskParserConfig) -> Self {
        TaskParser::new(
            Some(config.naming_style),
            Some(config.min_action_length),
            Some(config.ignore_actions.clone()),
        )
    }
}

impl<N: ActionNaming> TaskParser<N> {
    /// Creates a task parser which uses a custom naming policy.
    ///
    /// The ignore-list is fixed for the lifetime of the parser.
    pub fn with_naming(
        naming: N,
        min_action_length: Option<usize>,
        ignore_actions: Option<Vec<String>>,
    ) -> Self {
        TaskParser {
            naming,
            min_action_length: min_action_length.unwrap_or(DEFAULT_MIN_ACTION_LENGTH),
            ignore_actions: ignore_actions.unwrap_or_default().into_iter().collect(),
            registry: ClassRegistry::new(),
            transitions: TransitionTable::new(),
        }
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_actions.contains(name)
    }

    pub fn register_object_class(&mut self, class: &str) {
        self.registry.register_class(class);
    }

    /// Registers that `object` belongs to `class`.
    /// # Errors
    /// * [`ConsistencyError`](`crate::exception::TaskParserException::ConsistencyError`) if
    /// `object` was registered with a different class before.
    pub fn register_object(&mut self, object: &str, class: &str) -> TaskParserResult<()> {
        self.registry.register_object(object, class)
    }

    /// Canonical name of `action` under this parser's naming policy.
    pub fn compute_action_name(&self, action: &ActionInfo) -> String {
        self.naming.action_name(action)
    }

    /// Parses one demonstration.
    ///
    /// All objects are registered, then every action which is not on the ignore-list is
    /// named and recorded in temporal order. Consecutive recorded actions form transitions.
    /// # Arguments
    /// * `timestamps` - timestamp series of the demonstration.
    /// * `objects` - objects observed during the demonstration.
    /// * `actions` - actions in temporal order.
    /// # Errors
    /// * [`ConsistencyError`](`crate::exception::TaskParserException::ConsistencyError`) if an
    /// object is observed with a class that conflicts with an earlier registration. The parser
    /// stays as it was before the call.
    /// # Return
    /// Number of recorded actions.
    pub fn add_demonstration(
        &mut self,
        timestamps: &[f64],
        objects: &[ObjectInfo],
        actions: &[ActionInfo],
    ) -> TaskParserResult<usize> {
        let mut registry = self.registry.clone();
        for object in objects.iter() {
            registry.register_object(&object.id, &object.obj_class)?;
        }

        let mut sequence: Vec<RecordedAction> = Vec::with_capacity(actions.len());
        for action in actions.iter() {
            if self.is_ignored(&action.name) {
                trace!(action = %action.name, "skipping ignored action");
                continue;
            }
            if let Some(object) = &action.object_acted_on {
                if !registry.contains_object(object) {
                    warn!(action = %action.name, object = %object, "action refers to an unregistered object");
                }
            }
            let full_name = self.naming.action_name(action);
            debug!(full_name = %full_name, arm = %action.arm, "recorded action");
            sequence.push(RecordedAction::new(full_name, action));
        }

        let recorded = sequence.len();
        self.registry = registry;
        self.transitions.push_sequence(sequence);
        info!(
            demonstration = self.transitions.sequences().len() - 1,
            timestamps = timestamps.len(),
            objects = objects.len(),
            actions = actions.len(),
            recorded,
            "parsed demonstration"
        );
        Ok(recorded)
    }

    /// Parses one [`DemonstrationInfo`], see [`add_demonstration`](`Self::add_demonstration`).
    pub fn add_demonstration_info(
        &mut self,
        demonstration: &DemonstrationInfo,
    ) -> TaskParserResult<usize> {
        self.add_demonstration(
            &demonstration.timestamps,
            &demonstration.objects,
            &demonstration.actions,
        )
    }

    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// Recorded action sequences, one per successfully parsed demonstration.
    pub fn demonstrations(&self) -> &[Vec<RecordedAction>] {
        self.transitions.sequences()
    }

    pub fn num_demonstrations(&self) -> usize {
        self.transitions.sequences().len()
    }

    pub fn naming(&self) -> &N {
        &self.naming
    }

    pub fn min_action_length(&self) -> usize {
        self.min_action_length
    }
}

#[cfg(test)]
mod tests {
    use crate::demonstration::action_info::ActionInfo;
    use crate::demonstration::arm::Arm;
    use crate::demonstration::naming::{MockActionNaming, NamingStyle};
    use crate::demonstration::object_info::ObjectInfo;
    use crate::exception::TaskParserException;
    use crate::parser::task_parser::{TaskParser, TaskParserConfig, DEFAULT_MIN_ACTION_LENGTH};
    use crate::utils::identity_pose;

    fn action(arm: &str, name: &str, target: Option<&str>) -> ActionInfo {
        ActionInfo::new(arm, name, target, None, identity_pose()).unwrap()
    }

    fn object(id: &str, class: &str) -> ObjectInfo {
        ObjectInfo::new(identity_pose(), class, id, id)
    }

    fn names(parser: &TaskParser, demonstration: usize) -> Vec<&str> {
        parser.demonstrations()[demonstration]
            .iter()
            .map(|a| a.full_name.as_str())
            .collect()
    }

    #[test]
    fn pick_and_place_keeps_order() {
        let mut parser = TaskParser::new(Some(NamingStyle::Unique), None, None);
        let objects = vec![object("block_1", "block"), object("table", "surface")];
        let actions = vec![
            action("left", "pick", Some("block_1")),
            action("left", "place", Some("table")),
        ];
        let recorded = parser
            .add_demonstration(&[0., 1.], &objects, &actions)
            .unwrap();
        assert_eq!(recorded, 2);
        assert_eq!(names(&parser, 0), vec!["pick(block_1)", "place(table)"]);
        assert_eq!(parser.demonstrations()[0][0].arm, Arm::Left);
        let from_pick = parser.transitions().from_action("pick(block_1)").unwrap();
        assert_eq!(from_pick.len(), 1);
        assert_eq!(from_pick[0].to, "place(table)");
    }

    #[test]
    fn defaults() {
        let parser = TaskParser::new(None, None, None);
        assert_eq!(*parser.naming(), NamingStyle::Unique);
        assert_eq!(parser.min_action_length(), DEFAULT_MIN_ACTION_LENGTH);
        assert_eq!(parser.num_demonstrations(), 0);
        assert!(parser.registry().is_empty());
    }

    #[test]
    fn same_naming_merges_targets() {
        let mut parser = TaskParser::new(Some(NamingStyle::Same), Some(3), None);
        let actions = vec![
            action("right", "pick", Some("block_1")),
            action("right", "pick", Some("block_2")),
        ];
        parser.add_demonstration(&[], &[], &actions).unwrap();
        assert_eq!(names(&parser, 0), vec!["pick", "pick"]);
        assert_eq!(parser.transitions().from_action("pick").unwrap()[0].to, "pick");
        assert_eq!(parser.min_action_length(), 3);
    }

    #[test]
    fn ignored_actions_are_never_named() {
        let mut naming = MockActionNaming::new();
        naming
            .expect_action_name()
            .withf(|action: &ActionInfo| action.name == "idle")
            .times(0);
        naming
            .expect_action_name()
            .withf(|action: &ActionInfo| action.name != "idle")
            .times(2)
            .returning(|action: &ActionInfo| action.name.clone());
        let mut parser = TaskParser::with_naming(naming, None, Some(vec!["idle".to_string()]));
        let actions = vec![
            action("left", "idle", None),
            action("left", "pick", Some("block_1")),
            action("both", "idle", None),
            action("left", "place", Some("table")),
        ];
        let recorded = parser.add_demonstration(&[], &[], &actions).unwrap();
        assert_eq!(recorded, 2);
        assert!(parser.transitions().from_action("idle").is_none());
        assert!(parser.demonstrations()[0].iter().all(|a| a.full_name != "idle"));
    }

    #[test]
    fn only_ignored_actions_yield_empty_sequence() {
        let mut naming = MockActionNaming::new();
        naming.expect_action_name().times(0);
        let mut parser = TaskParser::with_naming(naming, None, Some(vec!["idle".to_string()]));
        let recorded = parser
            .add_demonstration(&[], &[], &[action("left", "idle", None)])
            .unwrap();
        assert_eq!(recorded, 0);
        assert_eq!(parser.num_demonstrations(), 1);
        assert_eq!(parser.transitions().action_names().count(), 0);
    }

    #[test]
    fn compute_action_name_uses_policy() {
        let parser = TaskParser::new(Some(NamingStyle::Unique), None, None);
        assert_eq!(
            parser.compute_action_name(&action("left", "pick", Some("block_1"))),
            "pick(block_1)"
        );
        assert_eq!(parser.compute_action_name(&action("left", "pick", None)), "pick()");
    }

    #[test]
    fn conflicting_demonstration_leaves_state_untouched() {
        let mut parser = TaskParser::new(None, None, None);
        parser
            .add_demonstration(
                &[0.],
                &[object("block_1", "block")],
                &[action("left", "pick", Some("block_1"))],
            )
            .unwrap();
        let registry = parser.registry().clone();
        let transitions = parser.transitions().clone();

        let result = parser.add_demonstration(
            &[0.],
            &[object("cup_1", "cup"), object("block_1", "cup")],
            &[action("left", "pour", Some("cup_1"))],
        );
        match result {
            Err(TaskParserException::ConsistencyError { object, .. }) => {
                assert_eq!(object, "block_1")
            }
            _ => panic!(),
        }
        assert_eq!(parser.registry(), &registry);
        assert_eq!(parser.transitions(), &transitions);
        assert!(!parser.registry().contains_object("cup_1"));
        assert_eq!(parser.num_demonstrations(), 1);
    }

    #[test]
    fn registries_of_disjoint_demonstrations_are_united() {
        let first = vec![object("block_1", "block"), object("table", "surface")];
        let second = vec![object("block_2", "block"), object("cup_1", "cup")];

        let mut parser = TaskParser::new(None, None, None);
        parser.add_demonstration(&[], &first, &[]).unwrap();
        parser.add_demonstration(&[], &second, &[]).unwrap();

        let mut expected = TaskParser::new(None, None, None);
        for o in first.iter().chain(second.iter()) {
            expected.register_object(&o.id, &o.obj_class).unwrap();
        }
        assert_eq!(parser.registry(), expected.registry());
        assert_eq!(parser.registry().len(), 4);
        assert_eq!(parser.registry().objects_of("block").unwrap().len(), 2);
    }

    #[test]
    fn register_object_through_parser() {
        let mut parser = TaskParser::new(None, None, None);
        parser.register_object_class("surface");
        parser.register_object("block_1", "block").unwrap();
        parser.register_object("block_1", "block").unwrap();
        assert!(parser.register_object("block_1", "surface").is_err());
        assert_eq!(parser.registry().class_of("block_1"), Some("block"));
        assert_eq!(parser.registry().classes().len(), 2);
    }

    #[test]
    fn parser_from_config() {
        let config =
            TaskParserConfig::from_json(r#"{"naming_style": "same", "ignore_actions": ["idle"]}"#)
                .unwrap();
        assert_eq!(config.min_action_length, DEFAULT_MIN_ACTION_LENGTH);
        let parser = TaskParser::from_config(&config);
        assert_eq!(*parser.naming(), NamingStyle::Same);
        assert!(parser.is_ignored("idle"));
        assert!(!parser.is_ignored("pick"));
        assert_eq!(TaskParserConfig::default().naming_style, NamingStyle::Unique);
    }

    #[test]
    fn config_must_be_an_object() {
        for json in ["[]", "[\"same\", 3, []]", "3", "\"unique\"", "{"].iter() {
            match TaskParserConfig::from_json(json) {
                Err(TaskParserException::DeserializationError { message: _ }) => {}
                _ => panic!("accepted {}", json),
            }
        }
        assert!(TaskParserConfig::from_json(r#"{"naming_style": 3}"#).is_err());
        assert!(TaskParserConfig::from_json(r#"{"naming": "same"}"#).is_err());
        assert_eq!(
            TaskParserConfig::from_json("{}").unwrap(),
            TaskParserConfig::default()
        );
    }

    #[test]
    fn ignore_list_is_fixed_at_construction() {
        let mut parser = TaskParser::new(None, None, Some(vec!["idle".to_string()]));
        assert!(parser.is_ignored("idle"));
        assert!(!parser.is_ignored("pick"));
        for _ in 0..2 {
            parser
                .add_demonstration(
                    &[],
                    &[],
                    &[action("left", "idle", None), action("left", "pick", None)],
                )
                .unwrap();
        }
        assert!(!parser.is_ignored("pick"));
        assert_eq!(names(&parser, 0), vec!["pick()"]);
        assert_eq!(names(&parser, 1), vec!["pick()"]);
    }
}
