// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for CRD registration and establishment checking.

pub mod crd;

pub use crd::{ensure_custom_resource_definitions, wait_for_established};
