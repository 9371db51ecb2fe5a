// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Idempotent CRD registration and establishment waiting

use crate::config::Config;
use crate::error::{RegistrarError, Result};
use crate::types::{NodeClass, NodeSet};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::{
    api::{DeleteParams, PostParams},
    Api, Client, CustomResourceExt, ResourceExt,
};
use kube_runtime::wait::{conditions, Condition};
use tokio::time::{sleep, Instant};
use tracing::{debug, info, instrument, warn};

/// Register the NodeSet and NodeClass CRDs and wait until each is established.
/// The first failure aborts; remaining definitions are not attempted.
pub async fn ensure_custom_resource_definitions(client: &Client, config: &Config) -> Result<()> {
    let api: Api<CustomResourceDefinition> = Api::all(client.clone());

    for definition in [NodeSet::crd(), NodeClass::crd()] {
        register_crd(&api, &definition, config).await?;
    }

    Ok(())
}

/// Register a single CRD. A definition that already exists is left untouched.
/// A freshly created one is polled until established; if that fails it is
/// deleted again and the error surfaced.
#[instrument(skip(api, definition, config), fields(crd = %definition.name_any()))]
async fn register_crd(
    api: &Api<CustomResourceDefinition>,
    definition: &CustomResourceDefinition,
    config: &Config,
) -> Result<()> {
    let name = definition.name_any();

    match api.create(&PostParams::default(), definition).await {
        Ok(_) => info!("Created CRD {}", name),
        Err(kube::Error::Api(err)) if err.code == 409 => {
            debug!("CRD {} already registered, skipping", name);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    match wait_for_established(api, &name, config).await {
        Ok(()) => Ok(()),
        Err(wait_err) => {
            warn!(
                "CRD {} did not become usable, deleting it again: {}",
                name, wait_err
            );
            match api.delete(&name, &DeleteParams::default()).await {
                Ok(_) => Err(wait_err),
                Err(cleanup) => Err(RegistrarError::CleanupFailed {
                    name,
                    source: Box::new(wait_err),
                    cleanup,
                }),
            }
        }
    }
}

/// Poll a CRD until the API server reports its Established condition as True.
/// A rejected name is logged and polling continues; only the deadline or a
/// failed fetch ends the loop early.
pub async fn wait_for_established(
    api: &Api<CustomResourceDefinition>,
    name: &str,
    config: &Config,
) -> Result<()> {
    let deadline = Instant::now() + config.establish_timeout;

    loop {
        sleep(config.poll_interval).await;

        let crd = api.get(name).await?;

        if conditions::is_crd_established().matches_object(Some(&crd)) {
            info!("CRD {} is established", name);
            return Ok(());
        }

        if let Some(reason) = name_conflict_reason(&crd) {
            warn!("Name conflict for CRD {}: {}", name, reason);
        }

        if Instant::now() >= deadline {
            return Err(RegistrarError::EstablishTimeout {
                name: name.to_string(),
                timeout: config.establish_timeout,
            });
        }
    }
}

/// Reason of the NamesAccepted condition when the API server rejected the names
fn name_conflict_reason(crd: &CustomResourceDefinition) -> Option<String> {
    crd.status
        .as_ref()?
        .conditions
        .as_ref()?
        .iter()
        .find(|c| c.type_ == "NamesAccepted" && c.status == "False")
        .map(|c| c.reason.clone().unwrap_or_default())
}
