use aff_core::entities::ProfileUpdate;
use aff_core::enums::PersonType;
use clap::{Args, Subcommand};

/// Own-profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show the stored profile.
    Show,
    /// Update profile fields; omitted fields are left unchanged.
    Update(ProfileFieldArgs),
}

/// Editable profile fields shared by `profile update` and `admin update`.
#[derive(Clone, Debug, Default, Args)]
pub struct ProfileFieldArgs {
    #[arg(long)]
    pub person_type: Option<PersonType>,
    #[arg(long)]
    pub tax_id: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub cep: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub number: Option<String>,
    #[arg(long)]
    pub district: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
}

impl From<ProfileFieldArgs> for ProfileUpdate {
    fn from(args: ProfileFieldArgs) -> Self {
        Self {
            person_type: args.person_type,
            tax_id: args.tax_id,
            name: args.name,
            email: args.email,
            phone: args.phone,
            cep: args.cep,
            address: args.address,
            number: args.number,
            district: args.district,
            city: args.city,
            state: args.state,
        }
    }
}
