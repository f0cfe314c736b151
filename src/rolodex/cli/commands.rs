//! # Session Loop
//!
//! `run()` parses the process flags, loads the config and then drives an
//! interactive session: one command per line, read from stdin, answered on
//! stdout. The session is generic over its input and output so tests can feed
//! it a script.
//!
//! A failing command never ends the session. Domain errors (bad phone, bad
//! date, unknown contact) are printed and the next line is read. Only I/O
//! failures on the session streams abort it.

use super::render::{
    render_all, render_error, render_messages, render_phones, render_upcoming, INVALID_COMMAND,
};
use super::setup::{parse_line, BotCommand, Cli};
use chrono::{Local, NaiveDate};
use clap::error::ErrorKind;
use clap::Parser;
use directories::ProjectDirs;
use rolodex::api::RolodexApi;
use rolodex::config::RolodexConfig;
use rolodex::error::Result;
use rolodex::logging;
use std::io::{self, BufRead, Write};

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const GREETING: &str = "How can I help you?";
const GOODBYE: &str = "Good bye!";

struct AppContext {
    api: RolodexApi,
    today: Option<NaiveDate>,
}

impl AppContext {
    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    session(&mut ctx, stdin.lock(), &mut stdout.lock())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "rolodex", "rolodex")
            .map(|dirs| dirs.config_dir().to_path_buf())
    });

    let config = match config_dir {
        Some(dir) => RolodexConfig::load(dir)?,
        None => RolodexConfig::default(),
    };

    Ok(AppContext {
        api: RolodexApi::new(config),
        today: cli.today,
    })
}

fn session<R: BufRead, W: Write>(ctx: &mut AppContext, mut input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{}", WELCOME)?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // end of input behaves like `close`
            writeln!(out)?;
            writeln!(out, "{}", GOODBYE)?;
            return Ok(());
        }

        let command = match parse_line(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(e)) => {
                write!(out, "{}", render_parse_error(&e))?;
                continue;
            }
        };

        tracing::debug!(?command, "dispatching");
        let closing = matches!(command, BotCommand::Close);
        match dispatch(ctx, command) {
            Ok(output) => write!(out, "{}", output)?,
            Err(e) if e.is_recoverable() => write!(out, "{}", render_error(&e))?,
            Err(e) => return Err(e),
        }
        if closing {
            return Ok(());
        }
    }
}

fn dispatch(ctx: &mut AppContext, command: BotCommand) -> Result<String> {
    match command {
        BotCommand::Hello => Ok(format!("{}\n", GREETING)),
        BotCommand::Add { name, phone } => handle_add(ctx, &name, &phone),
        BotCommand::Change {
            name,
            old_phone,
            new_phone,
        } => handle_change(ctx, &name, &old_phone, &new_phone),
        BotCommand::Phone { name } => handle_phone(ctx, &name),
        BotCommand::All => handle_all(ctx),
        BotCommand::AddBirthday { name, birthday } => handle_add_birthday(ctx, &name, &birthday),
        BotCommand::ShowBirthday { name } => handle_show_birthday(ctx, &name),
        BotCommand::Birthdays => handle_birthdays(ctx),
        BotCommand::Close => Ok(format!("{}\n", GOODBYE)),
    }
}

fn handle_add(ctx: &mut AppContext, name: &str, phone: &str) -> Result<String> {
    let result = ctx.api.add_contact(name, phone)?;
    Ok(render_messages(&result.messages))
}

fn handle_change(ctx: &mut AppContext, name: &str, old: &str, new: &str) -> Result<String> {
    let result = ctx.api.change_phone(name, old, new)?;
    Ok(render_messages(&result.messages))
}

fn handle_phone(ctx: &AppContext, name: &str) -> Result<String> {
    let result = ctx.api.phones(name)?;
    Ok(result.listed_records.iter().map(render_phones).collect())
}

fn handle_all(ctx: &AppContext) -> Result<String> {
    let result = ctx.api.all()?;
    Ok(render_all(&result.listed_records))
}

fn handle_add_birthday(ctx: &mut AppContext, name: &str, birthday: &str) -> Result<String> {
    let result = ctx.api.add_birthday(name, birthday)?;
    Ok(render_messages(&result.messages))
}

fn handle_show_birthday(ctx: &AppContext, name: &str) -> Result<String> {
    let result = ctx.api.show_birthday(name)?;
    Ok(render_messages(&result.messages))
}

fn handle_birthdays(ctx: &AppContext) -> Result<String> {
    let result = ctx.api.birthdays(ctx.today())?;
    Ok(render_upcoming(&result.upcoming, ctx.api.config().lookahead_days))
}

fn render_parse_error(e: &clap::Error) -> String {
    match e.kind() {
        ErrorKind::InvalidSubcommand => format!("{}\n", INVALID_COMMAND),
        _ => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        let mut ctx = AppContext {
            api: RolodexApi::new(RolodexConfig::default()),
            today: NaiveDate::from_ymd_opt(2024, 6, 18),
        };
        let mut out = Vec::new();
        session(&mut ctx, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn greets_and_says_goodbye() {
        let out = run_script("hello\nexit\n");
        assert!(out.starts_with("Welcome to the assistant bot!\nEnter a command: "));
        assert!(out.contains("How can I help you?"));
        assert!(out.ends_with("Good bye!\n"));
    }

    #[test]
    fn end_of_input_closes_session() {
        let out = run_script("hello\n");
        assert!(out.ends_with("Good bye!\n"));
    }

    #[test]
    fn stops_reading_after_close() {
        let out = run_script("close\nhello\n");
        assert!(!out.contains("How can I help you?"));
        assert!(out.ends_with("Enter a command: Good bye!\n"));
    }

    #[test]
    fn add_then_update() {
        let out = run_script("add Alice 1234567890\nadd Alice 0987654321\nphone Alice\n");
        assert!(out.contains("Contact added."));
        assert!(out.contains("Contact updated."));
        assert!(out.contains("phones: 1234567890, 0987654321"));
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let out = run_script("phone Bob\nadd Bob 12\nadd-birthday Bob 1.1.2000\nhello\n");
        assert!(out.contains("Contact not found."));
        assert!(out.contains("Phone number must contain exactly 10 digits."));
        assert!(out.contains("How can I help you?"));
    }

    #[test]
    fn unknown_command_and_blank_lines() {
        let out = run_script("\n   \nfrobnicate\n");
        assert!(out.contains("Invalid command."));
    }

    #[test]
    fn birthdays_use_reference_date() {
        let out = run_script(
            "add Alice 1234567890\nadd-birthday Alice 20.06.1990\nshow-birthday Alice\nbirthdays\n",
        );
        assert!(out.contains("Birthday added for Alice."));
        assert!(out.contains("Alice's birthday: 20.06.1990"));
        assert!(out.contains("Birthdays in the next week:\nAlice"));
    }

    #[test]
    fn no_birthdays() {
        let out = run_script("birthdays\n");
        assert!(out.contains("No birthdays in the next week."));
    }
}
