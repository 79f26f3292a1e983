use aff_auth::AuthError;
use aff_auth::reset_link::token_from_link;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::{AuthChangePasswordArgs, AuthRecoverArgs, AuthSetPasswordArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

pub async fn recover(
    args: &AuthRecoverArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let result = ctx.manager.recover(&args.email).await;
    match ctx.settle(result.into()) {
        Some(message) => output(&MessageResponse { message }, flags.format),
        None => Ok(()),
    }
}

pub async fn set_password(
    args: &AuthSetPasswordArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let token = match (&args.link, &args.token) {
        (Some(link), _) => token_from_link(link),
        (None, Some(token)) => Some(token.trim().to_string()),
        (None, None) => None,
    };
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        ctx.settle::<()>(
            AuthError::Validation("the reset link does not contain a token".into()).into(),
        );
        return Ok(());
    };

    let result = ctx
        .manager
        .set_password_with_token(&token, &args.password)
        .await;
    if ctx.follow(result) {
        output(
            &MessageResponse {
                message: "Password updated. Log in with the new password.".into(),
            },
            flags.format,
        )?;
    }
    Ok(())
}

pub async fn change_password(
    args: &AuthChangePasswordArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let result = ctx.manager.change_password(&args.current, &args.new).await;
    match ctx.settle(result.into()) {
        Some(message) => output(&MessageResponse { message }, flags.format),
        None => Ok(()),
    }
}
