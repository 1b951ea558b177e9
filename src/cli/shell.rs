//! Input loops: rustyline for a person at the terminal, stdin lines for scripts.

use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    history::DefaultHistory,
    Cmd, Context as ReadlineContext, Editor, Helper, Highlighter, Hinter, KeyEvent, Validator,
};

use crate::cli::commands;
use crate::cli::core::{CliError, CommandError, LoopControl};
use crate::cli::io as cli_io;
use crate::cli::shell_context::{CliMode, ShellContext};

/// Setting this variable switches the shell to line-by-line stdin input.
pub const SCRIPT_ENV: &str = "STORE_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandCompleter, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandCompleter));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    while context.running {
        let line = match editor.readline(&context.prompt()) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
                continue;
            }
            Err(ReadlineError::Eof) => {
                cli_io::print_info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        };
        if !line.trim().is_empty() {
            editor.add_history_entry(line.trim()).ok();
        }
        execute(context, &line)?;
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        execute(context, &line?)?;
        if !context.running {
            break;
        }
    }
    Ok(())
}

/// Runs one input line. Command failures are reported inline; only shell
/// failures come back as errors.
fn execute(context: &mut ShellContext, line: &str) -> Result<(), CliError> {
    match run_line(context, line) {
        Ok(()) => Ok(()),
        Err(err) => context.report_error(err),
    }
}

fn run_line(context: &mut ShellContext, line: &str) -> Result<(), CommandError> {
    let tokens = match shell_words::split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            cli_io::print_warning(format!("Could not read `{}`: {err}", line.trim()));
            return Ok(());
        }
    };
    let Some((name, rest)) = tokens.split_first() else {
        return Ok(());
    };
    if name.starts_with('#') {
        return Ok(());
    }

    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    if context.dispatch(name, &args)? == LoopControl::Exit {
        context.running = false;
    }
    Ok(())
}

/// Tab completion over the command table: root commands first, then the
/// action word of commands that take one.
#[derive(Helper, Hinter, Highlighter, Validator)]
struct CommandCompleter;

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = completions(&line[..pos]);
        let candidates = words
            .into_iter()
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

/// Byte offset of the word under the cursor and the words that can replace it.
fn completions(prefix: &str) -> (usize, Vec<&'static str>) {
    let start = prefix
        .rfind(char::is_whitespace)
        .map_or(0, |idx| idx + 1);
    let needle = prefix[start..].to_ascii_lowercase();
    let typed: Vec<&str> = prefix[..start].split_whitespace().collect();

    let words: Vec<&'static str> = match typed.as_slice() {
        [] => commands::names().collect(),
        [command] => commands::find(command)
            .map(|command| command.actions.to_vec())
            .unwrap_or_default(),
        _ => Vec::new(),
    };
    let matches = words
        .into_iter()
        .filter(|word| word.starts_with(&needle))
        .collect();
    (start, matches)
}
