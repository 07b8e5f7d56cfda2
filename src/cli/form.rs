use super::ui;
use crate::core::currency::{CurrencyCode, CurrencySet};
use crate::core::error::ConvertError;
use crate::core::rates::ExchangeRateProvider;
use crate::form::ConversionForm;
use anyhow::Result;
use console::Term;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    SetKey,
    ToggleKey,
    SetAmount,
    ChooseBase,
    Convert,
    Quit,
}

pub fn parse_command(input: &str) -> Option<FormCommand> {
    match input.trim().to_ascii_lowercase().as_str() {
        "k" | "key" => Some(FormCommand::SetKey),
        "s" | "show" | "hide" => Some(FormCommand::ToggleKey),
        "a" | "amount" => Some(FormCommand::SetAmount),
        "b" | "base" => Some(FormCommand::ChooseBase),
        "c" | "convert" | "" => Some(FormCommand::Convert),
        "q" | "quit" | "exit" => Some(FormCommand::Quit),
        _ => None,
    }
}

/// What the user picked at the base currency prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseChoice {
    Keep,
    Clear,
    Select(CurrencyCode),
}

/// Accepts a 1-based position in the list or a currency code.
pub fn parse_base_choice(input: &str, currencies: &CurrencySet) -> Option<BaseChoice> {
    let input = input.trim();
    if input.is_empty() {
        return Some(BaseChoice::Keep);
    }
    if input == "-" {
        return Some(BaseChoice::Clear);
    }
    if let Ok(index) = input.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| currencies.codes().get(i))
            .map(|code| BaseChoice::Select(code.clone()));
    }
    input.parse::<CurrencyCode>().ok().map(BaseChoice::Select)
}

/// Applies the text typed at the base currency prompt. Unknown codes and
/// codes outside the configured set leave the selection unchanged.
pub fn apply_base_choice<P: ExchangeRateProvider>(
    form: &mut ConversionForm<P>,
    input: &str,
) -> Result<(), ConvertError> {
    match parse_base_choice(input, form.currencies()) {
        Some(BaseChoice::Keep) => Ok(()),
        Some(BaseChoice::Clear) => {
            form.clear_base_currency();
            Ok(())
        }
        Some(BaseChoice::Select(code)) => form.select_base_currency(&code),
        None => Err(ConvertError::Validation(format!(
            "Unknown currency choice: {}",
            input.trim()
        ))),
    }
}

/// Renders the whole form as it should appear on screen. `notice` is a
/// message about the last field edit, shown above the command bar.
pub fn draw<P: ExchangeRateProvider>(form: &ConversionForm<P>, notice: Option<&str>) -> String {
    let api_key = if form.api_key().is_empty() {
        ui::style_text("(not set)", ui::StyleType::Subtle)
    } else {
        form.displayed_api_key()
    };
    let base = form
        .base_currency()
        .map_or_else(|| ui::style_text("(none)", ui::StyleType::Subtle), |c| c.to_string());

    let mut lines = vec![
        ui::style_text("Currency Converter", ui::StyleType::Title),
        String::new(),
        format!(
            "{} {api_key}  [{}]",
            ui::style_text("API Key:", ui::StyleType::Label),
            form.toggle_label()
        ),
        format!(
            "{} {}",
            ui::style_text("Amount: ", ui::StyleType::Label),
            form.amount()
        ),
        format!(
            "{} {base}",
            ui::style_text("Base:   ", ui::StyleType::Label)
        ),
        ui::separator(),
        ui::style_text("Converted Amounts:", ui::StyleType::Label),
    ];
    if let Some(outcome) = form.outcome() {
        lines.push(ui::outcome_text(outcome));
    }
    lines.push(ui::separator());
    if let Some(notice) = notice {
        lines.push(ui::style_text(notice, ui::StyleType::Error));
    }
    lines.push(ui::style_text(
        "[k] key  [s] show/hide key  [a] amount  [b] base  [c] convert  [q] quit",
        ui::StyleType::Subtle,
    ));
    lines.join("\n")
}

fn prompt(term: &Term, label: &str) -> Result<String> {
    term.write_str(&format!("{label}: "))?;
    Ok(term.read_line()?)
}

fn choose_base<P: ExchangeRateProvider>(
    term: &Term,
    form: &mut ConversionForm<P>,
) -> Result<Option<String>> {
    for (i, code) in form.currencies().codes().iter().enumerate() {
        term.write_line(&format!("{:>3}. {code}", i + 1))?;
    }
    let input = prompt(term, "Base currency (number or code, '-' to clear)")?;
    Ok(apply_base_choice(form, &input).err().map(|e| {
        debug!(error = %e, "Rejected base currency");
        e.to_string()
    }))
}

/// Runs the interactive form until the user quits.
pub async fn run<P: ExchangeRateProvider>(form: &mut ConversionForm<P>) -> Result<()> {
    let term = Term::stdout();
    let mut notice: Option<String> = None;
    loop {
        term.clear_screen()?;
        term.write_line(&draw(form, notice.take().as_deref()))?;

        let Some(command) = parse_command(&prompt(&term, ">")?) else {
            continue;
        };
        debug!(?command, "Form command");

        match command {
            FormCommand::SetKey => {
                term.write_str("API Key: ")?;
                let key = if form.is_key_masked() {
                    term.read_secure_line()?
                } else {
                    term.read_line()?
                };
                form.set_api_key(&key);
            }
            FormCommand::ToggleKey => form.toggle_key_visibility(),
            FormCommand::SetAmount => {
                let amount = prompt(&term, "Amount")?;
                form.set_amount(amount.trim());
            }
            FormCommand::ChooseBase => notice = choose_base(&term, form)?,
            FormCommand::Convert => {
                let pb = ui::new_spinner("Fetching exchange rates...");
                form.submit().await;
                pb.finish_and_clear();
            }
            FormCommand::Quit => return Ok(()),
        }
    }
}
