use aff_api::tracked_link;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LinkArgs;
use crate::commands::api_outcome;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LinkResponse {
    link: String,
}

pub fn handle(args: &LinkArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(session) = ctx.guard() else {
        return Ok(());
    };
    let result = tracked_link(&args.url, &session, &ctx.config.links);
    match ctx.settle(api_outcome(result)) {
        Some(link) => output(&LinkResponse { link }, flags.format),
        None => Ok(()),
    }
}
