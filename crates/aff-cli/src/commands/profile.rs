use aff_api::save_profile;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::commands::api_outcome;
use crate::context::AppContext;
use crate::output::output;

/// Handle `afl profile <subcommand>`.
pub async fn handle(
    action: ProfileCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let profile = match action {
        ProfileCommands::Show => {
            let Some(session) = ctx.guard() else {
                return Ok(());
            };
            ctx.settle(api_outcome(ctx.client.profile(&session).await))
        }
        ProfileCommands::Update(fields) => ctx.settle(api_outcome(
            save_profile(&ctx.manager, &ctx.client, fields.into()).await,
        )),
    };

    match profile {
        Some(profile) => output(&profile, flags.format),
        None => Ok(()),
    }
}
