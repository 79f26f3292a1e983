mod login;
mod logout;
mod password;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `afl auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags),
        AuthCommands::Status => status::handle(ctx, flags),
        AuthCommands::Recover(args) => password::recover(args, ctx, flags).await,
        AuthCommands::SetPassword(args) => password::set_password(args, ctx, flags).await,
        AuthCommands::ChangePassword(args) => password::change_password(args, ctx, flags).await,
    }
}
