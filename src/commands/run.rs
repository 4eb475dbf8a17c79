use anyhow::{bail, Result};
use bank_core::Bank;
use tracing::info;

use crate::{atm::Atm, services::StdConsole, ux::Palette, AppCtx};

/// Build the configured banks, empty for this run, and hand them to the ATM loop.
pub fn open_banks(ctx: &AppCtx) -> Result<Vec<Bank>> {
    let settings = ctx.settings_store.load()?;
    if settings.banks.is_empty() {
        bail!("No banks configured, run `atm-cli config --bank <NAME>` first");
    }
    let params = settings.credential_params()?;
    Ok(settings
        .banks
        .iter()
        .map(|name| Bank::with_credential_params(name, params.clone()))
        .collect())
}

pub fn handle(ctx: &AppCtx) -> Result<()> {
    let mut banks = open_banks(ctx)?;
    info!(banks = banks.len(), "Starting ATM");

    let mut console = StdConsole;
    Atm::new(&mut banks, &mut console, Palette::detect()).run()?;

    info!("ATM closed, all accounts discarded");
    Ok(())
}
