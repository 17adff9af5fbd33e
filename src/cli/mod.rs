pub mod context;
pub mod handlers;

use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::BookResult;
use crate::model::AddressBook;
use context::CLIContext;

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Say(String),
    Exit(String),
}

/// Run the interactive REPL on stdin/stdout against the book stored at `data_path`.
pub fn run(data_path: &Path) -> BookResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(data_path, stdin.lock(), stdout.lock())
}

/// Load the book, answer commands from `input` until `exit`/`close` or end of input,
/// then save the book back to `data_path`.
pub fn run_session<R: BufRead, W: Write>(data_path: &Path, mut input: R, mut output: W) -> BookResult<()> {
    let mut ctx = CLIContext::load(data_path)?;
    writeln!(output, "Welcome to the assistant bot!")?;

    loop {
        let line = match context::read_line(&mut input, &mut output, "Enter a command: ")? {
            Some(s) => s,
            None => {
                writeln!(output)?;
                writeln!(output, "Good bye!")?;
                break;
            }
        };

        let (command, args) = parse_command(&line);
        if command.is_empty() {
            continue;
        }

        match dispatch(&command, &args, &mut ctx.book, CLIContext::today()) {
            Reply::Say(message) => writeln!(output, "{}", message)?,
            Reply::Exit(message) => {
                writeln!(output, "{}", message)?;
                break;
            }
        }
    }

    output.flush()?;
    ctx.save()
}

/// Split input into a lowercased command keyword and whitespace-separated arguments.
pub fn parse_command(input: &str) -> (String, Vec<&str>) {
    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or("").to_lowercase();
    (command, parts.collect())
}

/// Run one command against the book. Handler errors become their message text here.
pub fn dispatch(command: &str, args: &[&str], book: &mut AddressBook, today: NaiveDate) -> Reply {
    debug!(command, args = args.len(), "dispatching command");

    let result = match command {
        "close" | "exit" => return Reply::Exit("Good bye!".into()),
        "hello" => Ok("How can I help you?".to_string()),
        "help" => Ok(HELP.trim_matches('\n').to_string()),

        "add" => handlers::add(args, book),
        "change" => handlers::change(args, book),
        "phone" => handlers::phone(args, book),
        "all" => handlers::show_all(book),
        "add-birthday" => handlers::add_birthday(args, book),
        "show-birthday" => handlers::show_birthday(args, book),
        "birthdays" => handlers::birthdays(book, today),
        "remove-phone" => handlers::remove_phone(args, book),
        "delete" => handlers::delete(args, book),

        _ => Ok("Invalid command.".to_string()),
    };

    Reply::Say(respond(result))
}

fn respond(result: BookResult<String>) -> String {
    result.unwrap_or_else(|e| e.to_string())
}

const HELP: &str = r#"
COMMANDS:
  hello                           Greet the bot
  add <name> <phone>              Add a contact, or another phone to an existing one
  change <name> <old> <new>       Replace a phone number
  phone <name>                    Show a contact's phone numbers
  remove-phone <name> <phone>     Remove a phone number
  delete <name>                   Delete a contact
  all                             Show every contact
  add-birthday <name> <DD.MM.YYYY>
                                  Set a contact's birthday
  show-birthday <name>            Show a contact's birthday
  birthdays                       Birthdays in the next 7 days
  help                            Show this help
  close / exit                    Save and quit

  Phone numbers are exactly 10 digits. Names are case-sensitive.
"#;
