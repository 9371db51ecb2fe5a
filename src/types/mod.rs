// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed declarations of the NodeSet and NodeClass custom resources.

pub mod node_class;
pub mod node_set;

pub use node_class::{NodeClass, NodeClassSpec};
pub use node_set::{Condition, NodeSet, NodeSetSpec, NodeSetStatus};
