//! `roastery shell`: one long session over the same database.
//!
//! The grid shown by the last `list`, `add` or `edit` stays current between lines, so row
//! numbers typed into `edit` mean what the user just saw. A failing line, including one
//! that panics, prints its message and the prompt comes back.

use super::commands::{execute, AppContext};
use super::render::print_messages;
use super::setup::{Commands, ShellLine};
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use roastery::api::CmdMessage;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, IsTerminal};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::process::ExitCode;

const PROMPT: &str = "roastery> ";

/// Where lines come from: a line editor on a terminal, plain lines when stdin is piped.
enum LineSource {
    Editor(DefaultEditor),
    Piped(io::Lines<io::StdinLock<'static>>),
}

impl LineSource {
    fn open() -> Self {
        if io::stdin().is_terminal() {
            match DefaultEditor::new() {
                Ok(editor) => return LineSource::Editor(editor),
                Err(e) => tracing::warn!(error = %e, "line editor unavailable, reading plain lines"),
            }
        }
        LineSource::Piped(io::stdin().lock().lines())
    }

    fn is_interactive(&self) -> bool {
        matches!(self, LineSource::Editor(_))
    }

    /// The next line, or `None` at end of input, Ctrl-C or Ctrl-D.
    fn next_line(&mut self) -> Option<String> {
        match self {
            LineSource::Editor(editor) => match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    Some(line)
                }
                Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => None,
                Err(e) => {
                    tracing::error!(error = %e, "failed to read input");
                    None
                }
            },
            LineSource::Piped(lines) => match lines.next()? {
                Ok(line) => Some(line),
                Err(e) => {
                    tracing::error!(error = %e, "failed to read input");
                    None
                }
            },
        }
    }
}

/// What one input line turned into.
#[derive(Debug)]
enum LineAction {
    Run(Box<Commands>),
    Quit,
    Skip,
}

pub(super) fn run(ctx: &mut AppContext) -> ExitCode {
    let mut source = LineSource::open();
    if source.is_interactive() {
        println!("{}", "Type a command (list, add, edit, show, init, config), or quit.".dimmed());
    }
    execute(ctx, Commands::List { json: false });

    while let Some(line) = source.next_line() {
        let command = match interpret(&line) {
            LineAction::Run(command) => *command,
            LineAction::Quit => break,
            LineAction::Skip => continue,
        };
        if catch_unwind(AssertUnwindSafe(|| execute(ctx, command))).is_err() {
            print_messages(&[CmdMessage::error(
                "internal error, see log output; the session is still open",
            )]);
        }
    }
    ExitCode::SUCCESS
}

/// Parses one line. Help and parse errors are printed here and the line is skipped.
fn interpret(line: &str) -> LineAction {
    let words = match split_line(line) {
        Ok(words) => words,
        Err(e) => {
            print_messages(&[CmdMessage::error(e)]);
            return LineAction::Skip;
        }
    };
    match words.first().map(String::as_str) {
        None => return LineAction::Skip,
        Some("quit") | Some("exit") => return LineAction::Quit,
        Some(_) => {}
    }

    match ShellLine::try_parse_from(&words) {
        Ok(parsed) => LineAction::Run(Box::new(parsed.command)),
        Err(e) => {
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    println!("{}", e)
                }
                _ => print_messages(&[CmdMessage::error(e.to_string().trim_end())]),
            }
            LineAction::Skip
        }
    }
}

/// Splits a line into words. Single and double quotes group words; a backslash escapes the
/// next character except inside single quotes.
fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') | (None, '\\') => match chars.next() {
                Some(next) => {
                    current.push(next);
                    in_word = true;
                }
                None => return Err("trailing backslash".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
