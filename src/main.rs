// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::info;

use nodeset_registrar::config::Config;
use nodeset_registrar::kubernetes::ensure_custom_resource_definitions;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting NodeSet registrar");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: poll_interval={:?} establish_timeout={:?}",
        config.poll_interval, config.establish_timeout
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    // Register the NodeSet and NodeClass CRDs before anything consumes them
    ensure_custom_resource_definitions(&client, &config).await?;

    info!("All custom resource definitions are registered and established");
    Ok(())
}
