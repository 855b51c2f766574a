use std::{
    borrow::Cow,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl};
use crate::cli::output;
use crate::cli::shell_context::ShellContext;
use crate::theme::Theme;

const SCRIPT_ENV: &str = "ONELEFT_CLI_SCRIPT";

/// Runs the shell. Script mode (`ONELEFT_CLI_SCRIPT` set) reads one command
/// per stdin line; otherwise an interactive line editor is used.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    tracing::debug!(?mode, "shell started");

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    if !context.state.is_active() {
        output::info("Set your limit with `limit <amount>`.");
    }

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                if run_line(context, trimmed) == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Bye.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !context.running || run_line(context, &line) == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

fn run_line(context: &mut ShellContext, line: &str) -> LoopControl {
    match handle_line(context, line) {
        Ok(control) => control,
        Err(err) => {
            context.report_error(err);
            LoopControl::Continue
        }
    }
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match shell_words::split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(err);
            return Ok(LoopControl::Continue);
        }
    };
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };

    let command = raw.to_lowercase();
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();

    let control = context.dispatch(&command, raw, &args)?;
    if control == LoopControl::Exit {
        context.running = false;
    }
    Ok(control)
}

/// Tab completion for command names and, after `theme`, theme names.
struct CommandHelper {
    commands: Vec<String>,
    themes: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_ascii_lowercase).collect();
        commands.sort();
        commands.dedup();
        let themes = Theme::all()
            .iter()
            .map(|theme| theme.name.to_ascii_lowercase())
            .collect();
        Self { commands, themes }
    }

    fn candidates(&self, line: &str) -> (usize, &[String], String) {
        let start = line
            .char_indices()
            .filter(|(_, ch)| ch.is_whitespace())
            .last()
            .map(|(idx, ch)| idx + ch.len_utf8())
            .unwrap_or(0);
        let needle = line[start..].to_ascii_lowercase();
        let previous: Vec<&str> = line[..start].split_whitespace().collect();
        let pool: &[String] = match previous.as_slice() {
            [] => &self.commands,
            [command] if command.eq_ignore_ascii_case("theme") => &self.themes,
            _ => &[],
        };
        (start, pool, needle)
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, pool, needle) = self.candidates(&line[..pos]);
        let matches = pool
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((start, matches))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> CommandHelper {
        CommandHelper::new(vec!["spend", "status", "theme", "themes"])
    }

    #[test]
    fn completes_command_names() {
        let helper = helper();
        let (start, pool, needle) = helper.candidates("st");
        assert_eq!(start, 0);
        assert_eq!(needle, "st");
        let found: Vec<_> = pool.iter().filter(|n| n.starts_with(&needle)).collect();
        assert_eq!(found, vec!["status"]);
    }

    #[test]
    fn completes_theme_names_after_theme() {
        let helper = helper();
        let (start, pool, needle) = helper.candidates("theme Oc");
        assert_eq!(start, 6);
        assert_eq!(needle, "oc");
        assert!(pool.iter().any(|name| name == "ocean"));
    }

    #[test]
    fn wide_whitespace_splits_on_char_boundary() {
        let helper = helper();
        let (start, pool, needle) = helper.candidates("theme\u{3000}oc");
        assert_eq!(start, "theme\u{3000}".len());
        assert_eq!(needle, "oc");
        assert!(pool.iter().any(|name| name == "ocean"));
    }

    #[test]
    fn other_arguments_have_no_completions() {
        let helper = helper();
        let (_, pool, _) = helper.candidates("spend 1");
        assert!(pool.is_empty());
    }
}
