//! Listing table extraction from a Cardmarket card page.
//!
//! Deliberately naive string slicing tailored to the Cardmarket markup: no
//! DOM is built. Tag and attribute matching is ASCII case-insensitive.

use crate::listing::RawListingRow;
use log::debug;

/// Class of the table holding the seller offers
const LISTING_TABLE_CLASS: &str = "MKMTable fullWidth mt-40";
const PRICE_CELL_CLASS: &str = "st_price Price";
const CONDITION_CELL_CLASS: &str = "Condition";

/// Extract the seller rows of a card page, in document order.
///
/// Returns `None` when the page has no listing table (unknown card, error
/// page, changed layout).
pub fn listing_rows(page: &str) -> Option<Vec<RawListingRow>> {
    let table = tag_blocks(page, "table")
        .into_iter()
        .find(|block| has_class(block, LISTING_TABLE_CLASS))?;

    let rows: Vec<RawListingRow> = tag_blocks(table, "tr")
        .into_iter()
        .map(|row| RawListingRow {
            price: price_text(row),
            condition: condition_markup(row),
        })
        .collect();

    debug!("Listing table has {} rows", rows.len());
    Some(rows)
}

/// Visible text of the price cell, e.g. "0,50 €"
fn price_text(row: &str) -> Option<String> {
    let cell = find_cell(row, PRICE_CELL_CLASS)?;
    Some(strip_tags(&decode_entities(inner(cell))))
}

/// Markup of the first `span` inside a `div` of the condition cell. The
/// grade label usually sits in an attribute, so the tags are kept.
fn condition_markup(row: &str) -> Option<String> {
    let cell = find_cell(row, CONDITION_CELL_CLASS)?;
    tag_blocks(inner(cell), "div")
        .into_iter()
        .find_map(|div| tag_blocks(inner(div), "span").into_iter().next())
        .map(str::to_string)
}

fn find_cell<'a>(row: &'a str, class: &str) -> Option<&'a str> {
    tag_blocks(row, "td")
        .into_iter()
        .find(|cell| has_class(cell, class))
}

/// All complete `<tag ...>...</tag>` blocks of `s`, outermost first.
///
/// A block ends at the first matching closing tag, so same-name nesting is
/// not supported.
pub fn tag_blocks<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    let lc = s.to_ascii_lowercase();
    let open = format!("<{}", tag.to_ascii_lowercase());
    let close = format!("</{}>", tag.to_ascii_lowercase());

    let mut blocks = Vec::new();
    let mut from = 0;
    while let Some(rel) = lc[from..].find(&open) {
        let start = from + rel;
        let after_name = start + open.len();

        // "<tr" must not match "<track"
        if !lc[after_name..].starts_with(|c: char| c == '>' || c == '/' || c.is_ascii_whitespace()) {
            from = after_name;
            continue;
        }

        let Some(end_rel) = lc[after_name..].find(&close) else {
            break;
        };
        let end = after_name + end_rel + close.len();
        blocks.push(&s[start..end]);
        from = end;
    }
    blocks
}

/// True if the opening tag of `block` has exactly `class="<class>"`
fn has_class(block: &str, class: &str) -> bool {
    let open_end = block.find('>').unwrap_or(block.len());
    let open_tag = block[..open_end].to_ascii_lowercase();
    let class = class.to_ascii_lowercase();
    open_tag.contains(&format!("class=\"{class}\"")) || open_tag.contains(&format!("class='{class}'"))
}

/// Given a complete tag block like `<td ...>INNER</td>`, return INNER
/// (which may still contain nested tags).
pub fn inner(block: &str) -> &str {
    match (block.find('>'), block.rfind('<')) {
        (Some(open_end), Some(close_start)) if close_start > open_end => {
            &block[open_end + 1..close_start]
        }
        _ => "",
    }
}

/// Remove all tags `<...>`, then collapse whitespace.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Decode the handful of entities that appear in price cells
pub fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&euro;", "€")
        .replace("&#8364;", "€")
        .replace("&amp;", "&")
}

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
