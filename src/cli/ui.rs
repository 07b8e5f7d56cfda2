use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::core::conversion::ConversionResult;
use crate::form::Outcome;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Label,
    Value,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Label => style(text).bold(),
        StyleType::Value => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Converted amounts as a two column table.
pub fn conversion_table(result: &ConversionResult) -> Table {
    let mut table = new_styled_table();
    table.set_header(vec![header_cell("Currency"), header_cell("Amount")]);
    for (code, value) in &result.amounts {
        table.add_row(vec![
            Cell::new(code.as_str()),
            Cell::new(format!("{value:.2}")).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Styled text for the results area. Conversions show the plain
/// `CODE: value` lines followed by the same amounts as a table.
pub fn outcome_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Converted(result) => format!(
            "{}\n{}",
            style_text(&result.to_string(), StyleType::Value),
            conversion_table(result)
        ),
        Outcome::RatesUnavailable => style_text(&outcome.to_string(), StyleType::Subtle),
        Outcome::Failed(_) => style_text(&outcome.to_string(), StyleType::Error),
    }
}

/// Spinner shown while a request is in flight.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
    {
        pb.set_style(spinner_style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// A separator line matching the terminal width.
pub fn separator() -> String {
    let term_width = console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80);
    "─".repeat(term_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ConvertError;

    #[test]
    fn table_lists_every_converted_amount() {
        let result = ConversionResult {
            amounts: vec![
                ("EUR".parse().unwrap(), 9.2),
                ("JPY".parse().unwrap(), 1512.3),
            ],
        };
        let rendered = conversion_table(&result).to_string();
        assert!(rendered.contains("Currency"));
        assert!(rendered.contains("EUR"));
        assert!(rendered.contains("9.20"));
        assert!(rendered.contains("1512.30"));
    }

    #[test]
    fn converted_text_shows_lines_and_table() {
        let outcome = Outcome::Converted(ConversionResult {
            amounts: vec![
                ("EUR".parse().unwrap(), 9.2),
                ("JPY".parse().unwrap(), 1512.3),
            ],
        });
        let text = console::strip_ansi_codes(&outcome_text(&outcome)).to_string();
        assert!(text.starts_with("EUR: 9.20\nJPY: 1512.30\n"));
        assert!(text.contains("Currency"));
        assert!(text.contains("Amount"));
    }

    #[test]
    fn failure_text_keeps_message() {
        let outcome = Outcome::Failed(ConvertError::Validation("Bad input".to_string()));
        assert!(console::strip_ansi_codes(&outcome_text(&outcome)).contains("Bad input"));
    }
}
