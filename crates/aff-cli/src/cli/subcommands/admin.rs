use clap::Subcommand;

use super::ProfileFieldArgs;

/// Admin commands. The stored session must carry the `admin` role.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// List affiliates.
    List {
        /// Keep rows whose name, email or CPF/CNPJ contains this text.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show one affiliate.
    Show { id: String },
    /// Update an affiliate; omitted fields are left unchanged.
    Update {
        id: String,
        #[command(flatten)]
        fields: ProfileFieldArgs,
    },
}
