use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `afl` binary.
#[derive(Debug, Parser)]
#[command(name = "afl", version, about = "Affiliate dashboard client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress hints and non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use aff_core::enums::PersonType;
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{AdminCommands, AuthCommands, ProfileCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_and_after_subcommand() {
        let before = Cli::try_parse_from(["afl", "--format", "raw", "--verbose", "dashboard"])
            .expect("cli should parse");
        assert_eq!(before.format, OutputFormat::Raw);
        assert!(before.verbose);
        assert!(matches!(before.command, Commands::Dashboard));

        let after = Cli::try_parse_from(["afl", "dashboard", "--quiet"]).expect("cli should parse");
        assert!(after.quiet);
        assert_eq!(after.format, OutputFormat::Json);
    }

    #[test]
    fn output_format_rejects_table() {
        assert!(Cli::try_parse_from(["afl", "--format", "table", "dashboard"]).is_err());
    }

    #[test]
    fn login_requires_email_and_password() {
        assert!(Cli::try_parse_from(["afl", "auth", "login", "--email", "a@example.com"]).is_err());

        let cli = Cli::try_parse_from([
            "afl",
            "auth",
            "login",
            "--email",
            "a@example.com",
            "--password",
            "pw",
        ])
        .expect("cli should parse");
        let Commands::Auth {
            action: AuthCommands::Login(args),
        } = cli.command
        else {
            panic!("expected auth login");
        };
        assert_eq!(args.email, "a@example.com");
    }

    #[test]
    fn set_password_takes_link_or_token_not_both() {
        assert!(
            Cli::try_parse_from(["afl", "auth", "set-password", "--password", "n"]).is_err()
        );
        assert!(
            Cli::try_parse_from([
                "afl",
                "auth",
                "set-password",
                "--link",
                "https://x/?token=a",
                "--token",
                "a",
                "--password",
                "n",
            ])
            .is_err()
        );
        assert!(
            Cli::try_parse_from(["afl", "auth", "set-password", "--token", "a", "--password", "n"])
                .is_ok()
        );
    }

    #[test]
    fn register_parses_person_type() {
        let cli = Cli::try_parse_from([
            "afl",
            "register",
            "--person-type",
            "pj",
            "--tax-id",
            "11.222.333/0001-81",
            "--name",
            "Loja X",
            "--email",
            "x@loja.com.br",
            "--cep",
            "80010-000",
            "--number",
            "10",
            "--password",
            "pw",
        ])
        .expect("cli should parse");
        let Commands::Register(args) = cli.command else {
            panic!("expected register");
        };
        assert_eq!(args.person_type, PersonType::Company);
        assert_eq!(args.street, None);
    }

    #[test]
    fn admin_and_profile_commands_parse() {
        let cli = Cli::try_parse_from(["afl", "admin", "list", "--filter", "maria"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Admin {
                action: AdminCommands::List { filter: Some(_) }
            }
        ));

        let cli = Cli::try_parse_from(["afl", "admin", "update", "7", "--state", "pr"])
            .expect("cli should parse");
        let Commands::Admin {
            action: AdminCommands::Update { id, fields },
        } = cli.command
        else {
            panic!("expected admin update");
        };
        assert_eq!(id, "7");
        assert_eq!(fields.state.as_deref(), Some("pr"));

        let cli = Cli::try_parse_from(["afl", "profile", "update", "--name", "Ana"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Profile {
                action: ProfileCommands::Update(_)
            }
        ));
    }
}
