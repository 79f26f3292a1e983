use clap::{ArgGroup, Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Forget the stored session.
    Logout,
    /// Show the current session state (no network).
    Status,
    /// Email a password-reset link.
    Recover(AuthRecoverArgs),
    /// Set a new password from a reset link or its token.
    SetPassword(AuthSetPasswordArgs),
    /// Change the password of the logged-in user.
    ChangePassword(AuthChangePasswordArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRecoverArgs {
    #[arg(long)]
    pub email: String,
}

#[derive(Clone, Debug, Args)]
#[command(group(ArgGroup::new("reset").required(true).args(["link", "token"])))]
pub struct AuthSetPasswordArgs {
    /// Full reset link as received by email.
    #[arg(long)]
    pub link: Option<String>,
    /// Bare reset token.
    #[arg(long)]
    pub token: Option<String>,
    /// New password.
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthChangePasswordArgs {
    #[arg(long)]
    pub current: String,
    #[arg(long)]
    pub new: String,
}
