use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rolodex::model::parse_date;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", version)]
#[command(about = "Contact book with upcoming birthday reminders", long_about = None)]
pub struct Cli {
    /// Date to count upcoming birthdays from (DD.MM.YYYY), defaults to today
    #[arg(long, value_parser = parse_reference_date)]
    pub today: Option<NaiveDate>,

    /// Directory holding config.json
    #[arg(long, env = "ROLODEX_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_reference_date(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

/// One line typed at the prompt.
#[derive(Parser, Debug)]
#[command(
    name = "rolodex",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]..."
)]
pub struct Line {
    #[command(subcommand)]
    pub command: BotCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// Say hello
    Hello,

    /// Add a contact, or another phone to an existing contact
    Add { name: String, phone: String },

    /// Replace one of a contact's phones
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Show a contact's phones
    Phone { name: String },

    /// Show all contacts
    All,

    /// Set a contact's birthday (DD.MM.YYYY)
    AddBirthday { name: String, birthday: String },

    /// Show a contact's birthday
    ShowBirthday { name: String },

    /// List birthdays coming up this week
    Birthdays,

    /// End the session
    #[command(alias = "exit")]
    Close,
}

/// Splits a prompt line on whitespace and parses it.
///
/// Returns `None` for a blank line.
pub fn parse_line(line: &str) -> Option<Result<BotCommand, clap::Error>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    Some(Line::try_parse_from(tokens).map(|l| l.command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(line: &str) -> BotCommand {
        parse_line(line).unwrap().unwrap()
    }

    fn parse_err(line: &str) -> ErrorKind {
        parse_line(line).unwrap().unwrap_err().kind()
    }

    #[test]
    fn parses_every_command() {
        assert_eq!(parse("hello"), BotCommand::Hello);
        assert_eq!(
            parse("add Alice 1234567890"),
            BotCommand::Add {
                name: "Alice".into(),
                phone: "1234567890".into()
            }
        );
        assert_eq!(
            parse("change Alice 1234567890 0987654321"),
            BotCommand::Change {
                name: "Alice".into(),
                old_phone: "1234567890".into(),
                new_phone: "0987654321".into()
            }
        );
        assert_eq!(
            parse("phone Alice"),
            BotCommand::Phone {
                name: "Alice".into()
            }
        );
        assert_eq!(parse("all"), BotCommand::All);
        assert_eq!(
            parse("add-birthday Alice 15.03.1995"),
            BotCommand::AddBirthday {
                name: "Alice".into(),
                birthday: "15.03.1995".into()
            }
        );
        assert_eq!(
            parse("show-birthday Alice"),
            BotCommand::ShowBirthday {
                name: "Alice".into()
            }
        );
        assert_eq!(parse("birthdays"), BotCommand::Birthdays);
        assert_eq!(parse("close"), BotCommand::Close);
        assert_eq!(parse("exit"), BotCommand::Close);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse("   all  \n"), BotCommand::All);
        assert_eq!(
            parse("phone\tAlice"),
            BotCommand::Phone {
                name: "Alice".into()
            }
        );
    }

    #[test]
    fn blank_line() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \n").is_none());
    }

    #[test]
    fn unknown_command() {
        assert_eq!(parse_err("frobnicate"), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn wrong_argument_count() {
        assert_eq!(parse_err("add Alice"), ErrorKind::MissingRequiredArgument);
        assert_eq!(parse_err("all extra"), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_is_displayed_through_error() {
        assert_eq!(parse_err("help"), ErrorKind::DisplayHelp);
    }

    #[test]
    fn cli_flags() {
        let cli = Cli::try_parse_from(["rolodex", "--today", "18.06.2024", "-v"]).unwrap();
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 6, 18));
        assert!(cli.verbose);

        assert!(Cli::try_parse_from(["rolodex", "--today", "2024-06-18"]).is_err());
    }
}
