use anyhow::Result;
use tracing::info;

use crate::{cli::ConfigArgs, AppCtx};

pub fn handle(args: ConfigArgs, ctx: &AppCtx) -> Result<()> {
    let mut settings = ctx.settings_store.load()?;
    settings.banks = args.banks;
    ctx.settings_store.save(&settings)?;
    info!(banks = ?settings.banks, "Configuration saved successfully ✅");
    Ok(())
}
