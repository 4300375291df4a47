// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains exception and Result definitions
use std::convert::Infallible;
use thiserror::Error;

/// Represents all kind of errors which can occur while parsing demonstrations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaskParserException {
    /// InvalidArmError is returned if an arm designator is neither LEFT, RIGHT nor BOTH.
    /// The action which carried it must be discarded.
    #[error("activity parse failed: arm {arm:?} not understood, options are limited to LEFT, RIGHT, and BOTH")]
    InvalidArmError {
        /// The designator as it was received.
        arm: String,
    },

    /// ConsistencyError is returned if an object is registered under a class which differs
    /// from the one it was registered with before. This indicates corrupted upstream data.
    #[error("object {object:?} has inconsistent class in data: {class:?} vs {existing_class:?}")]
    ConsistencyError {
        /// Identifier of the object.
        object: String,
        /// Class that was requested.
        class: String,
        /// Class the object is already registered with.
        existing_class: String,
    },

    /// DeserializationError is returned if a demonstration or a configuration cannot be decoded.
    #[error("{message:?}")]
    DeserializationError { message: String },
}

/// creates an InvalidArmError from anything printable
pub(crate) fn create_invalid_arm_error(arm: impl ToString) -> TaskParserException {
    TaskParserException::InvalidArmError {
        arm: arm.to_string(),
    }
}

impl From<serde_json::Error> for TaskParserException {
    fn from(error: serde_json::Error) -> Self {
        TaskParserException::DeserializationError {
            message: error.to_string(),
        }
    }
}

impl From<Infallible> for TaskParserException {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result type which can have TaskParserException as Error
pub type TaskParserResult<T> = Result<T, TaskParserException>;
