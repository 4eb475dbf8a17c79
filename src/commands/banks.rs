use anyhow::Result;

use crate::AppCtx;

pub fn handle(ctx: &AppCtx) -> Result<()> {
    let settings = ctx.settings_store.load()?;
    for (i, name) in settings.banks.iter().enumerate() {
        println!("[{}] {}", i + 1, name);
    }
    Ok(())
}
