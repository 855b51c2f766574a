use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::theme::Theme;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "theme",
            "Show or change the colour theme",
            "theme [name|index]",
            cmd_theme,
        ),
        CommandEntry::new("themes", "List available themes", "themes", cmd_themes),
    ]
}

fn resolve(arg: &str) -> Option<usize> {
    if let Ok(index) = arg.parse::<usize>() {
        return (index < Theme::all().len()).then_some(index);
    }
    Theme::by_name(arg).map(|(index, _)| index)
}

fn cmd_theme(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(arg) = args.first() else {
        output::info(format!("Theme: {}", context.theme()));
        return Ok(());
    };
    let index = resolve(arg).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "Unknown theme `{}`. Type `themes` to list them.",
            arg
        ))
    })?;
    context.set_theme(index as i64)?;
    output::success(format!("Theme set to {}", context.theme()));
    Ok(())
}

fn cmd_themes(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let current = context.theme();
    for (index, theme) in Theme::all().iter().enumerate() {
        let marker = if theme == current { "*" } else { " " };
        output::info(format!("{marker} {index}  {theme}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_names_and_indexes() {
        assert_eq!(resolve("1"), Some(1));
        assert_eq!(resolve("ocean"), Some(2));
        assert_eq!(resolve("4"), None);
        assert_eq!(resolve("neon"), None);
    }
}
