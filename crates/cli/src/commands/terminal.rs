// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal command

use super::Context;
use crate::output;
use anayat_adapters::NotifyAdapter;
use anayat_core::KeyValueStore;
use anayat_engine::Dashboard;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub async fn exec<S, N>(dashboard: &Dashboard<S, N>, line: &str, ctx: &Context) -> Result<()>
where
    S: KeyValueStore,
    N: NotifyAdapter,
{
    let mut rng = StdRng::from_entropy();
    if let Some(reply) = dashboard.terminal(line, &mut rng).await? {
        output::print(&reply, ctx.format)?;
    }
    Ok(())
}
