//! Tests for listing table extraction.

use super::*;

const PAGE: &str = r#"<html><body>
<div class="page-title"><h1>Lightning Bolt</h1></div>
<table class="MKMTable fullWidth mt-40">
  <thead><tr><th>Seller</th><th>Condition</th><th>Price</th></tr></thead>
  <tbody>
    <tr class="row">
      <td class="Seller"><a href="/u/alice">alice</a></td>
      <td class="Condition"><div class="d-flex"><span class="badge" title="Near Mint">NM</span></div></td>
      <td class="st_price Price">0,50&nbsp;&euro;</td>
    </tr>
    <TR>
      <TD class="Condition"><DIV><SPAN title="Played">PL</SPAN></DIV></TD>
      <TD class="st_price Price"><span>40,00 €</span> <span>PPU 10,00 €</span></TD>
    </TR>
    <tr>
      <td class="Condition">unknown</td>
      <td class="st_price Price"></td>
    </tr>
  </tbody>
</table>
</body></html>"#;

mod listing_rows_tests {
    use super::*;

    #[test]
    fn extracts_rows_in_document_order() {
        let rows = listing_rows(PAGE).unwrap();
        // header row + three offers
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0], RawListingRow::default());

        assert_eq!(rows[1].price.as_deref(), Some("0,50 €"));
        assert_eq!(
            rows[1].condition.as_deref(),
            Some(r#"<span class="badge" title="Near Mint">NM</span>"#)
        );

        assert_eq!(rows[2].price.as_deref(), Some("40,00 € PPU 10,00 €"));
        assert_eq!(
            rows[2].condition.as_deref(),
            Some(r#"<SPAN title="Played">PL</SPAN>"#)
        );
    }

    #[test]
    fn condition_without_div_span_is_absent() {
        let rows = listing_rows(PAGE).unwrap();
        assert_eq!(rows[3].condition, None);
        assert_eq!(rows[3].price.as_deref(), Some(""));
    }

    #[test]
    fn missing_table_is_none() {
        let page = r#"<html><body><h1>Page not found</h1></body></html>"#;
        assert!(listing_rows(page).is_none());
    }

    #[test]
    fn other_tables_are_ignored() {
        let page = r#"<table class="MKMTable"><tr><td class="st_price Price">1,00 €</td></tr></table>"#;
        assert!(listing_rows(page).is_none());
    }

    #[test]
    fn empty_table_has_no_rows() {
        let page = r#"<table class="MKMTable fullWidth mt-40"></table>"#;
        assert_eq!(listing_rows(page), Some(vec![]));
    }
}

mod helper_tests {
    use super::*;

    #[test]
    fn tag_blocks_skips_longer_tag_names() {
        let s = "<track>x</track><tr>a</tr><tr class='b'>b</tr>";
        assert_eq!(tag_blocks(s, "tr"), vec!["<tr>a</tr>", "<tr class='b'>b</tr>"]);
    }

    #[test]
    fn tag_blocks_stops_at_unclosed_tag() {
        assert_eq!(tag_blocks("<td>a</td><td>b", "td"), vec!["<td>a</td>"]);
    }

    #[test]
    fn inner_returns_content() {
        assert_eq!(inner("<td class=\"x\">a <b>c</b></td>"), "a <b>c</b>");
        assert_eq!(inner("<td/>"), "");
    }

    #[test]
    fn strip_tags_collapses_whitespace() {
        assert_eq!(strip_tags("  <b>1,00</b>\n\t €  "), "1,00 €");
    }
}
