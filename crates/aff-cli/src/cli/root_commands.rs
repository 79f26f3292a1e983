use aff_core::enums::PersonType;
use clap::{Args, Subcommand};

use crate::cli::subcommands::{AdminCommands, AuthCommands, ProfileCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Login, logout, and password management.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Create an affiliate account.
    Register(RegisterArgs),
    /// Balance and orders for the logged-in affiliate.
    Dashboard,
    /// View or edit your own profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Manage affiliates (admin sessions only).
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Look up an address by CEP.
    Cep(CepArgs),
    /// Build a tracked product link for the logged-in affiliate.
    Link(LinkArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RegisterArgs {
    /// PF (individual) or PJ (company).
    #[arg(long, default_value = "PF")]
    pub person_type: PersonType,
    /// CPF or CNPJ; punctuation is ignored.
    #[arg(long)]
    pub tax_id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub cep: String,
    /// Street; looked up from the CEP when omitted.
    #[arg(long)]
    pub street: Option<String>,
    #[arg(long)]
    pub complement: Option<String>,
    #[arg(long)]
    pub number: String,
    /// District; looked up from the CEP when omitted.
    #[arg(long)]
    pub district: Option<String>,
    /// City; looked up from the CEP when omitted.
    #[arg(long)]
    pub city: Option<String>,
    /// Two-letter state; looked up from the CEP when omitted.
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct CepArgs {
    /// Eight-digit CEP, with or without the dash.
    pub cep: String,
}

#[derive(Clone, Debug, Args)]
pub struct LinkArgs {
    /// Product page URL (http or https).
    pub url: String,
}
