use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use sentiment_core::SentimentTone;

use super::constants::PROMPT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    Title,
    Hint,
    Error,
    Tone(SentimentTone),
    Rgb(u8, u8, u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    PrintLine(Vec<Span>),
    /// Overwrite the transient status line in place.
    UpdateStatus(String),
    ClearStatus,
    ShowPrompt,
}

pub struct Terminal<W: Write> {
    out: W,
    status_visible: bool,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            status_visible: false,
        }
    }

    pub fn execute(&mut self, commands: Vec<TerminalCommand>) -> io::Result<()> {
        for command in commands {
            match command {
                TerminalCommand::PrintLine(spans) => {
                    self.clear_status()?;
                    for span in spans {
                        write!(self.out, "{}", paint(&span))?;
                    }
                    writeln!(self.out)?;
                }
                TerminalCommand::UpdateStatus(text) => {
                    write!(self.out, "\r\x1b[2K{}", text.dimmed())?;
                    self.status_visible = true;
                }
                TerminalCommand::ClearStatus => self.clear_status()?,
                TerminalCommand::ShowPrompt => {
                    self.clear_status()?;
                    write!(self.out, "{}", PROMPT.bold())?;
                }
            }
        }
        self.out.flush()
    }

    fn clear_status(&mut self) -> io::Result<()> {
        if self.status_visible {
            write!(self.out, "\r\x1b[2K")?;
            self.status_visible = false;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn paint(span: &Span) -> ColoredString {
    let text = span.text.as_str();
    match span.style {
        SpanStyle::Plain => text.normal(),
        SpanStyle::Title => text.bold(),
        SpanStyle::Hint => text.dimmed(),
        SpanStyle::Error => text.red(),
        SpanStyle::Tone(SentimentTone::Positive) => text.green().bold(),
        SpanStyle::Tone(SentimentTone::Neutral) => text.truecolor(245, 158, 11).bold(),
        SpanStyle::Tone(SentimentTone::Negative) => text.red().bold(),
        SpanStyle::Tone(SentimentTone::Unrecognized) => text.bold(),
        SpanStyle::Rgb(r, g, b) => text.truecolor(r, g, b),
    }
}
