use aff_core::entities::Address;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CepArgs;
use crate::commands::api_outcome;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CepResponse {
    found: bool,
    address: Option<Address>,
}

pub async fn handle(args: &CepArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(address) = ctx.settle(api_outcome(ctx.postal.lookup(&args.cep).await)) else {
        return Ok(());
    };
    output(
        &CepResponse {
            found: address.is_some(),
            address,
        },
        flags.format,
    )
}
