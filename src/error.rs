// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("CRD {name} was not established within {timeout:?}")]
    EstablishTimeout { name: String, timeout: Duration },

    #[error("{source}; deleting CRD {name} after the failure also failed: {cleanup}")]
    CleanupFailed {
        name: String,
        source: Box<RegistrarError>,
        cleanup: kube::Error,
    },
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
