use console::style;
use tally_lib::colors::Tone;

/// Color text for the terminal.  Nothing is added when the output is not a
/// terminal, or when NO_COLOR / CLICOLOR ask not to.
pub fn paint(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Affirmative => style(text).green().to_string(),
        Tone::Warning => style(text).red().to_string(),
        Tone::Muted => style(text).dim().to_string(),
    }
}
