// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API group the NodeSet and NodeClass resources belong to
pub const GROUP: &str = "nodeset.k8s.io";

/// Version the resources are currently served at
pub const VERSION: &str = "v1alpha1";

/// Controller that picks up NodeClass resources without an explicit one
pub const DEFAULT_NODE_CONTROLLER: &str = "nodeset.k8s.io/node-controller";

/// CRD registration polling configuration
pub mod crd {
    /// Delay in milliseconds between establishment checks on a fresh CRD
    pub const POLL_INTERVAL_MS: u64 = 500;
    /// Seconds a freshly registered CRD may take to become established
    pub const ESTABLISH_TIMEOUT_SECS: u64 = 60;
}
