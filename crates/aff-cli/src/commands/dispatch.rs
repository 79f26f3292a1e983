use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Register(args) => commands::register::handle(args, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Profile { action } => commands::profile::handle(action, ctx, flags).await,
        Commands::Admin { action } => commands::admin::handle(action, ctx, flags).await,
        Commands::Cep(args) => commands::cep::handle(&args, ctx, flags).await,
        Commands::Link(args) => commands::link::handle(&args, ctx, flags),
    }
}
