// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the ClassRegistry type.
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::exception::{TaskParserException, TaskParserResult};

/// Accumulated mapping between object instances and their semantic classes.
///
/// Once an object is assigned a class it keeps that class for the lifetime of the registry.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ClassRegistry {
    classes: BTreeSet<String>,
    objects_by_class: BTreeMap<String, BTreeSet<String>>,
    class_by_object: BTreeMap<String, String>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        ClassRegistry::default()
    }

    /// Adds a class to the set of known classes. Registering a class twice has no effect.
    pub fn register_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    /// Registers that `object` belongs to `class`.
    /// # Errors
    /// * [`ConsistencyError`](`crate::exception::TaskParserException::ConsistencyError`) if
    /// `object` is already registered with another class. The registry is left untouched.
    pub fn register_object(&mut self, object: &str, class: &str) -> TaskParserResult<()> {
        if let Some(existing_class) = self.class_by_object.get(object) {
            if existing_class != class {
                return Err(TaskParserException::ConsistencyError {
                    object: object.to_string(),
                    class: class.to_string(),
                    existing_class: existing_class.clone(),
                });
            }
            return Ok(());
        }
        self.register_class(class);
        self.objects_by_class
            .entry(class.to_string())
            .or_default()
            .insert(object.to_string());
        self.class_by_object
            .insert(object.to_string(), class.to_string());
        Ok(())
    }

    /// All known classes, including those without any registered object.
    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    /// Objects registered with `class`.
    pub fn objects_of(&self, class: &str) -> Option<&BTreeSet<String>> {
        self.objects_by_class.get(class)
    }

    /// Class `object` is registered with.
    pub fn class_of(&self, object: &str) -> Option<&str> {
        self.class_by_object.get(object).map(String::as_str)
    }

    pub fn contains_object(&self, object: &str) -> bool {
        self.class_by_object.contains_key(object)
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.class_by_object.len()
    }

    pub fn is_empty(&self) -> bool {
        self.class_by_object.is_empty()
    }
}
