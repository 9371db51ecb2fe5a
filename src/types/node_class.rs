// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_NODE_CONTROLLER;
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "nodeset.k8s.io", version = "v1alpha1", kind = "NodeClass")]
#[serde(rename_all = "camelCase")]
pub struct NodeClassSpec {
    /// Controller responsible for turning this class into actual nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_controller: Option<String>,
    /// Opaque configuration handed to the node controller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, String>>,
}

impl NodeClass {
    /// Controller for this class, falling back to the crate default
    pub fn controller_name(&self) -> &str {
        self.spec
            .node_controller
            .as_deref()
            .unwrap_or(DEFAULT_NODE_CONTROLLER)
    }
}
