use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if ctx.follow(ctx.manager.logout()) {
        output(&AuthLogoutResponse { cleared: true }, flags.format)?;
    }
    Ok(())
}
