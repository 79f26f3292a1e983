use aff_auth::{LoginOutcome, ViewAdapter};
use aff_core::AuthState;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    state: AuthState,
    user_id: String,
    display_name: Option<String>,
    role: Option<String>,
    note: Option<&'static str>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let result = ctx.manager.login(&args.email, &args.password).await;
    let Some(login) = ctx.settle(result.into()) else {
        return Ok(());
    };

    let response = match &login {
        LoginOutcome::Authenticated(session) => AuthLoginResponse {
            state: login.state(),
            user_id: session.user_id.clone(),
            display_name: Some(session.display_name.clone()),
            role: session.role.clone(),
            note: None,
        },
        LoginOutcome::PasswordChangeRequired { user_id } => AuthLoginResponse {
            state: login.state(),
            user_id: user_id.clone(),
            display_name: None,
            role: None,
            note: Some("a new password must be set using the reset link sent by email"),
        },
    };

    output(&response, flags.format)?;
    ctx.adapter.navigate(login.next_view());
    Ok(())
}
