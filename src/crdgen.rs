// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::CustomResourceExt;

use nodeset_registrar::types::{NodeClass, NodeSet};

fn main() -> Result<()> {
    println!("---");
    print!("{}", serde_yaml::to_string(&NodeSet::crd())?);
    println!("---");
    print!("{}", serde_yaml::to_string(&NodeClass::crd())?);
    Ok(())
}
