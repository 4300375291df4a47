// Copyright (c) 2021 Marco Boneberger
// Licensed under the EUPL-1.2-or-later

//! Contains the types describing one recorded demonstration.

pub mod action_info;
pub mod arm;
pub mod demonstration_info;
pub mod naming;
pub mod object_info;
