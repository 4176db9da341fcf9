use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use userdir::model::{Field, Language, Theme};

#[derive(Parser, Debug)]
#[command(name = "userdir", bin_name = "userdir", version)]
#[command(about = "Keep a small directory of users from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $USERDIR_HOME, then the OS data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List users
    #[command(alias = "ls")]
    List,

    /// Show one user
    #[command(alias = "v")]
    Show {
        /// Position in the list (1, 2, ...) or id prefix
        selector: String,
    },

    /// Add a user
    #[command(alias = "n")]
    Add {
        #[command(flatten)]
        fields: FieldArgs,

        /// Never prompt; fail if the user is incomplete
        #[arg(long)]
        no_input: bool,
    },

    /// Edit a user
    #[command(alias = "e")]
    Edit {
        /// Position in the list (1, 2, ...) or id prefix
        selector: String,

        #[command(flatten)]
        fields: FieldArgs,

        /// Never prompt; fail if the result is invalid
        #[arg(long)]
        no_input: bool,
    },

    /// Delete one or more users
    #[command(alias = "rm")]
    Delete {
        /// Positions or id prefixes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Show or set the display language (en, ru)
    Lang { value: Option<Language> },

    /// Show or set the display theme (light, dark)
    Theme { value: Option<Theme> },

    /// Get or set configuration
    Config {
        /// Configuration key (default-language, default-theme)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Username
    #[arg(short, long)]
    pub username: Option<String>,

    /// Email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// Age
    #[arg(short, long)]
    pub age: Option<String>,
}

impl FieldArgs {
    /// Fields given on the command line, in form order.
    pub fn provided(&self) -> Vec<(Field, &str)> {
        Field::ALL
            .iter()
            .filter_map(|field| self.get(*field).map(|value| (*field, value)))
            .collect()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Username => self.username.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Age => self.age.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.provided().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("userdir").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_means_list() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn add_collects_fields() {
        let cli = parse(&["add", "-u", "alice", "--email", "a@b.cd", "--no-input"]);
        match cli.command {
            Some(Commands::Add { fields, no_input }) => {
                assert!(no_input);
                assert_eq!(
                    fields.provided(),
                    vec![(Field::Username, "alice"), (Field::Email, "a@b.cd")]
                );
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn edit_alias_and_selector() {
        let cli = parse(&["e", "2", "--age", "31"]);
        match cli.command {
            Some(Commands::Edit { selector, fields, .. }) => {
                assert_eq!(selector, "2");
                assert_eq!(fields.get(Field::Age), Some("31"));
                assert_eq!(fields.get(Field::Username), None);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn preference_values_are_typed() {
        assert!(matches!(
            parse(&["theme", "dark"]).command,
            Some(Commands::Theme {
                value: Some(Theme::Dark)
            })
        ));
        assert!(matches!(
            parse(&["lang"]).command,
            Some(Commands::Lang { value: None })
        ));
        assert!(Cli::try_parse_from(["userdir", "lang", "fr"]).is_err());
    }

    #[test]
    fn delete_needs_a_selector() {
        assert!(Cli::try_parse_from(["userdir", "rm"]).is_err());
        let cli = parse(&["rm", "1", "3"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Delete { selectors }) if selectors == ["1", "3"]
        ));
    }

    #[test]
    fn home_is_global() {
        let cli = parse(&["list", "--home", "/tmp/x"]);
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/x")));
    }
}
