use crate::terminal::colors;
use colored::*;
use mapmark_common::geo::Coordinate;

pub type Detail = (String, ColoredString);

pub fn coordinate_to_key_value_pair(position: Coordinate) -> Vec<Detail> {
    vec![
        (
            String::from("lat"),
            format!("{:.4}", position.lat).color(colors::LATITUDE),
        ),
        (
            String::from("lng"),
            format!("{:.4}", position.lng).color(colors::LONGITUDE),
        ),
    ]
}

/// Flattens marker markup into one line of plain text for the terminal.
///
/// Tags become separators; common entities are decoded.
pub fn markup_to_text(markup: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_tag = false;

    for c in markup.chars() {
        match c {
            '<' => {
                in_tag = true;
                push_part(&mut parts, &mut current);
            }
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            _ => current.push(c),
        }
    }
    push_part(&mut parts, &mut current);

    parts.join(" · ")
}

fn push_part(parts: &mut Vec<String>, current: &mut String) {
    let text = decode_entities(current.trim());
    if !text.is_empty() {
        parts.push(text);
    }
    current.clear();
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_markup_becomes_one_line() {
        let text = markup_to_text("<h1>Acme</h1>\n<h3>Robust real-time paradigm</h3>");
        assert_eq!(text, "Acme · Robust real-time paradigm");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(markup_to_text("<h1>Smith &amp; Sons</h1>"), "Smith & Sons");
    }

    #[test]
    fn plain_text_is_kept() {
        assert_eq!(markup_to_text("no tags"), "no tags");
    }

    #[test]
    fn coordinates_use_four_decimals() {
        let pairs = coordinate_to_key_value_pair(Coordinate::new(52.0, -0.12346));
        assert_eq!(pairs[0].0, "lat");
        assert_eq!(&*pairs[0].1, "52.0000");
        assert_eq!(&*pairs[1].1, "-0.1235");
    }
}
