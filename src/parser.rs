// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the costar::TaskParser type.

pub mod class_registry;
pub mod task_parser;
pub mod transitions;
