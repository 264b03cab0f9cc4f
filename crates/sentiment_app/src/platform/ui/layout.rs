use sentiment_core::OrbSpec;

use super::backdrop::rasterize;
use super::constants::*;
use super::terminal::{Span, SpanStyle, TerminalCommand};

/// Screen drawn once at startup: the orb backdrop, title and hint.
pub fn initial_commands(orbs: &[OrbSpec]) -> Vec<TerminalCommand> {
    let mut commands: Vec<TerminalCommand> = rasterize(orbs, BACKDROP_COLUMNS, BACKDROP_ROWS)
        .into_iter()
        .map(TerminalCommand::PrintLine)
        .collect();

    commands.push(TerminalCommand::PrintLine(vec![Span::new(TITLE, SpanStyle::Title)]));
    commands.push(TerminalCommand::PrintLine(vec![Span::new(HINT, SpanStyle::Hint)]));
    commands.push(TerminalCommand::PrintLine(vec![Span::new(
        format!("Type {} to exit.", QUIT_COMMANDS.join(" or ")),
        SpanStyle::Hint,
    )]));
    commands.push(TerminalCommand::PrintLine(Vec::new()));
    commands.push(TerminalCommand::ShowPrompt);
    commands
}
