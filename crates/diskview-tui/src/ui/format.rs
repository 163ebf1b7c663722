//! Column formatting for listing rows.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use diskview_core::{DisplayRow, EntrySize};

const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];
const ELLIPSIS: &str = "...";
/// Width of the numeric part of the size column; the unit follows it.
const SIZE_NUMBER_WIDTH: usize = 10;

/// Column widths for one rendered row.
#[derive(Debug, Clone, Copy)]
pub struct RowLayout {
    pub index_width: usize,
    pub name_width: usize,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            index_width: 5,
            name_width: 64,
        }
    }
}

/// Format a byte count: plain bytes below 1024, otherwise base-1024 units
/// with two decimals.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

/// Format an entry size for the size column.
pub fn format_size(size: &EntrySize) -> String {
    match size {
        EntrySize::Known(bytes) => format_bytes(*bytes),
        EntrySize::Pending => "...".to_string(),
        EntrySize::Unavailable(_) => "n/a".to_string(),
    }
}

/// Pad `name` to exactly `width` terminal columns, truncating with `...`.
pub fn fit_name(name: &str, width: usize) -> String {
    let name_width = name.width();
    if name_width <= width {
        return format!("{name}{}", " ".repeat(width - name_width));
    }

    let budget = width.saturating_sub(ELLIPSIS.len());
    let mut fitted = String::new();
    let mut used = 0;
    for ch in name.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        fitted.push(ch);
        used += ch_width;
    }
    fitted.push_str(ELLIPSIS);
    used += ELLIPSIS.len();
    fitted.push_str(&" ".repeat(width.saturating_sub(used)));
    fitted
}

/// Render one listing row.
///
/// Directories show their index, a `+` marker and a bracketed name; files
/// leave the index column blank and use a `-` marker.
pub fn format_row(row: &DisplayRow<'_>, layout: RowLayout) -> String {
    let (index, marker, name) = match row.index {
        Some(index) => (
            format!("{index:>width$}", width = layout.index_width),
            '+',
            format!("[{}]", row.entry.name),
        ),
        None => (" ".repeat(layout.index_width), '-', row.entry.name.to_string()),
    };

    format!(
        "{index} {marker} {}{}",
        fit_name(&name, layout.name_width),
        size_column(&row.entry.size)
    )
}

/// Right-align the number of a size label, keeping the unit after it.
fn size_column(size: &EntrySize) -> String {
    let label = format_size(size);
    match label.rsplit_once(' ') {
        Some((number, unit)) => format!("{number:>width$} {unit}", width = SIZE_NUMBER_WIDTH),
        None => format!("{label:>width$}", width = SIZE_NUMBER_WIDTH + 3),
    }
}
