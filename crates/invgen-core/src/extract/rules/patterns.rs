//! Compiled patterns for field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Entity label followed by optional colon and the rest of the line.
    // Label matching is case-insensitive.
    pub static ref ENTITY_LINE: Regex =
        Regex::new(r"(?i)(?:From|To|Name|Entity):?\s*(.+)").unwrap();

    // DD/MM/YYYY or DD-MM-YYYY shaped token, no range validation.
    pub static ref DATE_TOKEN: Regex =
        Regex::new(r"(\d{2}[/-]\d{2}[/-]\d{4})").unwrap();

    // Total/Amount label, optional colon and dollar sign, then a numeric
    // token with optional comma separators and exactly two decimals. The
    // labels are matched case-sensitively.
    pub static ref AMOUNT_LINE: Regex =
        Regex::new(r"(?:Total|Amount):?\s*\$?\s*([\d,]+\.\d{2})").unwrap();

    // Description label followed by the rest of the line, case-sensitive.
    pub static ref DESCRIPTION_LINE: Regex =
        Regex::new(r"(?:Description|For):?\s*(.+)").unwrap();
}
