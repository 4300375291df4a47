// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! # costar-task-parser
//! costar-task-parser turns recorded manipulation demonstrations into canonical action
//! sequences and action transitions from which a task graph can be built.
//!
//! ## Design
//! The library is divided into two main Modules:
//! * [demonstration](`crate::demonstration`) - contains the types describing one demonstration:
//! observed objects, actions and the arm which performed them.
//! * [parser](`crate::parser`) - contains the [`TaskParser`] which accumulates the object
//! classes and the transitions over many demonstrations.
//!
//! # Example:
//!```
//! use costar::{ActionInfo, NamingStyle, ObjectInfo, TaskParser, TaskParserResult};
//! use nalgebra::Isometry3;
//! fn main() -> TaskParserResult<()> {
//!     let mut parser = TaskParser::new(Some(NamingStyle::Unique), None, None);
//!     let objects = vec![
//!         ObjectInfo::new(Isometry3::identity(), "block", "block_1", "red block"),
//!         ObjectInfo::new(Isometry3::identity(), "surface", "table", "table"),
//!     ];
//!     let actions = vec![
//!         ActionInfo::new("left", "pick", Some("block_1"), None, Isometry3::identity())?,
//!         ActionInfo::new("left", "place", Some("table"), Some("block_1"), Isometry3::identity())?,
//!     ];
//!     parser.add_demonstration(&[0., 1.], &objects, &actions)?;
//!     let names: Vec<&str> = parser.demonstrations()[0]
//!         .iter()
//!         .map(|action| action.full_name.as_str())
//!         .collect();
//!     assert_eq!(names, vec!["pick(block_1)", "place(table)"]);
//!     Ok(())
//! }
//! ```
//!
//! An arm is given either as an [`Arm`] or as one of the strings "left", "right" and "both"
//! in any case. Everything else is rejected with an
//! [`InvalidArmError`](`crate::exception::TaskParserException::InvalidArmError`):
//! ```
//! # use costar::{ActionInfo, Arm};
//! # use nalgebra::Isometry3;
//! assert!(ActionInfo::new("up", "pick", None, None, Isometry3::identity()).is_err());
//! assert_eq!("Left".parse::<Arm>().unwrap(), Arm::Left);
//! ```
//!
//! As objects are observed with a class, the parser keeps a registry of classes. An object
//! which shows up with two different classes is a
//! [`ConsistencyError`](`crate::exception::TaskParserException::ConsistencyError`) and the
//! demonstration which contained it is not recorded.
pub mod demonstration;
pub mod exception;
pub mod parser;
pub mod utils;

pub use demonstration::action_info::ActionInfo;
pub use demonstration::arm::Arm;
pub use demonstration::demonstration_info::DemonstrationInfo;
pub use demonstration::naming::{ActionNaming, NamingStyle};
pub use demonstration::object_info::ObjectInfo;
pub use exception::{TaskParserException, TaskParserResult};
pub use parser::class_registry::ClassRegistry;
pub use parser::task_parser::{TaskParser, TaskParserConfig, DEFAULT_MIN_ACTION_LENGTH};
pub use parser::transitions::{RecordedAction, Transition, TransitionTable};
pub use utils::*;
