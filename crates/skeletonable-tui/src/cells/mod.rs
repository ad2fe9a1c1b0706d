//! Demo items shown in the skeleton table

mod circled;
mod header;
mod option;
mod profile;

pub use circled::CircledRow;
pub use header::RegularHeader;
pub use option::OptionRow;
pub use profile::ProfileRow;

use unicode_width::UnicodeWidthChar;

use crate::table::SkeletonTable;

/// Register every demo template with `table`
pub fn register_templates(table: &mut SkeletonTable) {
    table.register(ProfileRow::IDENTIFIER, || Box::new(ProfileRow::new()));
    table.register(CircledRow::IDENTIFIER, || Box::new(CircledRow::new()));
    table.register(OptionRow::IDENTIFIER, || Box::new(OptionRow::new()));
    table.register(RegularHeader::IDENTIFIER, || Box::new(RegularHeader::new()));
}

/// Cut `text` to at most `width` terminal columns
pub(crate) fn fit(text: &str, width: u16) -> String {
    let mut used = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width as usize {
            break;
        }
        used += ch_width;
        out.push(ch);
    }
    out
}
