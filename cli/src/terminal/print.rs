use crate::terminal::colors;
use crate::terminal::format::Detail;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Events on this target are written verbatim by the formatter.
pub const PRINT_TARGET: &str = "mapmark::print";

/// Width of the key column in marker trees.
const TREE_KEY_WIDTH: usize = 7;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{}", msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title = format!("⟦ MAPMARK v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let side = "═".repeat(TOTAL_WIDTH.saturating_sub(title.width()) / 2);
    print(&format!(
        "{}{}{}",
        side.color(colors::SEPARATOR),
        title.color(colors::PRIMARY).bold(),
        side.color(colors::SEPARATOR)
    ));
}

/// Section title centred in a rule, hidden from `-q` on.
pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title = format!("⟦ {} ⟧", msg.to_uppercase());
    let pad = TOTAL_WIDTH.saturating_sub(title.width());
    let (left, right) = (pad / 2, pad - pad / 2);

    print(&format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        title.color(colors::PRIMARY),
        "─".repeat(right).color(colors::SEPARATOR)
    ));
}

/// `[idx] name` followed by one branch per detail.
pub fn marker_tree(idx: usize, name: &str, details: &[Detail]) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));

    for (i, (key, value)) in details.iter().enumerate() {
        let branch = if i + 1 == details.len() { "└─" } else { "├─" };
        let dots = ".".repeat(TREE_KEY_WIDTH.saturating_sub(key.len()));
        print(&format!(
            " {} {}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            format!("{dots}:").color(colors::SEPARATOR),
            value
        ));
    }
}

/// Key/value lines with the values aligned on the longest key.
pub fn summary(rows: &[(&str, String)]) {
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in rows {
        let dots = ".".repeat(width + 1 - key.len());
        print(&format!(
            "{} {}{} {}",
            ">".color(colors::SEPARATOR),
            key.color(colors::PRIMARY),
            format!("{dots}:").color(colors::SEPARATOR),
            value.color(colors::TEXT_DEFAULT)
        ));
    }
}

const NO_MARKERS: &str = r#"
         _   _  ___    __  __    _    ____  _  _______ ____  ____
        | \ | |/ _ \  |  \/  |  / \  |  _ \| |/ / ____|  _ \/ ___|
        |  \| | | | | | |\/| | / _ \ | |_) | ' /|  _| | |_) \___ \
        | |\  | |_| | | |  | |/ ___ \|  _ <| . \| |___|  _ < ___) |
        |_| \_|\___/  |_|  |_/_/   \_\_| \_\_|\_\_____|_| \_\____/
"#;

pub fn no_results() {
    print(&format!("{}", NO_MARKERS.red().bold()));
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
