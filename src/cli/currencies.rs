use super::ui;
use crate::core::currency::CurrencySet;
use comfy_table::Cell;

pub fn display_as_table(currencies: &CurrencySet) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("#"), ui::header_cell("Currency")]);
    for (i, code) in currencies.codes().iter().enumerate() {
        let label = if i == 0 {
            format!("{code} (default base)")
        } else {
            code.to_string()
        };
        table.add_row(vec![Cell::new(i + 1), Cell::new(label)]);
    }
    table.to_string()
}

pub fn run(currencies: &CurrencySet) {
    println!("{}", display_as_table(currencies));
}
