use aff_api::filter_affiliates;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::commands::api_outcome;
use crate::context::AppContext;
use crate::output::output;

/// Handle `afl admin <subcommand>`.
pub async fn handle(
    action: AdminCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(session) = ctx.guard() else {
        return Ok(());
    };

    match action {
        AdminCommands::List { filter } => {
            let result = ctx.client.list_affiliates(&session).await;
            let Some(affiliates) = ctx.settle(api_outcome(result)) else {
                return Ok(());
            };
            let term = filter.unwrap_or_default();
            output(&filter_affiliates(&affiliates, &term), flags.format)
        }
        AdminCommands::Show { id } => {
            let result = ctx.client.affiliate(&session, &id).await;
            match ctx.settle(api_outcome(result)) {
                Some(affiliate) => output(&affiliate, flags.format),
                None => Ok(()),
            }
        }
        AdminCommands::Update { id, fields } => {
            let result = ctx.client.update_affiliate(&session, &id, fields.into()).await;
            match ctx.settle(api_outcome(result)) {
                Some(affiliate) => output(&affiliate, flags.format),
                None => Ok(()),
            }
        }
    }
}
