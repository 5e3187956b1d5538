//! Unit tests for decklist parsing.

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn card(quantity: u32, name: &str) -> DecklistEntry {
    DecklistEntry::CardLine {
        quantity,
        name: name.to_string(),
    }
}

mod parse_line_tests {
    use super::*;

    #[test]
    fn parses_quantity_with_x_suffix() {
        assert_eq!(
            DecklistEntry::parse_line("4x Lightning Bolt\n"),
            card(4, "Lightning Bolt")
        );
    }

    #[test]
    fn parses_plain_quantity() {
        assert_eq!(
            DecklistEntry::parse_line("2 Counterspell\n"),
            card(2, "Counterspell")
        );
    }

    #[test]
    fn parses_uppercase_suffix_and_multi_digit() {
        assert_eq!(
            DecklistEntry::parse_line("12X Island"),
            card(12, "Island")
        );
    }

    #[test]
    fn slash_comment_is_kept_verbatim() {
        assert_eq!(
            DecklistEntry::parse_line("// note\n"),
            DecklistEntry::Comment("// note\n".to_string())
        );
    }

    #[test]
    fn single_token_is_comment() {
        assert_eq!(
            DecklistEntry::parse_line("abc\n"),
            DecklistEntry::Comment("abc\n".to_string())
        );
    }

    #[test]
    fn blank_line_is_comment() {
        assert_eq!(
            DecklistEntry::parse_line("\n"),
            DecklistEntry::Comment("\n".to_string())
        );
    }

    #[test]
    fn word_before_name_is_comment() {
        let line = "Sideboard cards below\n";
        assert_eq!(
            DecklistEntry::parse_line(line),
            DecklistEntry::Comment(line.to_string())
        );
    }

    #[test]
    fn only_one_trailing_character_is_tolerated() {
        let line = "4xx Lightning Bolt\n";
        assert_eq!(
            DecklistEntry::parse_line(line),
            DecklistEntry::Comment(line.to_string())
        );
    }

    #[test]
    fn negative_quantity_is_comment() {
        assert!(DecklistEntry::parse_line("-1 Black Lotus").is_comment());
    }

    #[test]
    fn overflowing_quantity_is_comment() {
        assert_eq!(
            DecklistEntry::parse_line("4294967296 Island\n"),
            DecklistEntry::Comment("4294967296 Island\n".to_string())
        );
        assert!(DecklistEntry::parse_line("4294967296x Island").is_comment());
        assert_eq!(
            DecklistEntry::parse_line("4294967295x Island"),
            card(4_294_967_295, "Island")
        );
    }

    #[test]
    fn name_keeps_inner_spaces_and_commas() {
        assert_eq!(
            DecklistEntry::parse_line("1 Jace, the Mind Sculptor\r\n"),
            card(1, "Jace, the Mind Sculptor")
        );
    }

    #[test]
    fn repairs_apostrophe_in_name() {
        assert_eq!(
            DecklistEntry::parse_line("1x Urza\u{2019}s Saga\n"),
            card(1, "Urza's Saga")
        );
    }

    #[test]
    fn card_accessor() {
        assert_eq!(card(3, "Opt").card(), Some((3, "Opt")));
        assert_eq!(DecklistEntry::Comment("x".into()).card(), None);
    }
}

mod repair_tests {
    use super::*;

    #[test]
    fn repairs_latin1_mojibake() {
        assert_eq!(repair_apostrophes("Urza\u{e2}\u{80}\u{99}s Mine"), "Urza's Mine");
    }

    #[test]
    fn repairs_cp1252_mojibake() {
        assert_eq!(
            repair_apostrophes("Gaea\u{e2}\u{20ac}\u{2122}s Cradle"),
            "Gaea's Cradle"
        );
    }

    #[test]
    fn leaves_other_accents_alone() {
        assert_eq!(repair_apostrophes("Lim-Dûl's Vault"), "Lim-Dûl's Vault");
        assert_eq!(repair_apostrophes("Jötun Grunt"), "Jötun Grunt");
    }
}

mod read_decklist_tests {
    use super::*;

    #[test]
    fn reads_entries_in_file_order() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "// creatures\n4x Goblin Guide\n\n2 Lightning Bolt").unwrap();

        let entries = read_decklist(tmp.path()).unwrap();
        assert_eq!(
            entries,
            vec![
                DecklistEntry::Comment("// creatures\n".to_string()),
                card(4, "Goblin Guide"),
                DecklistEntry::Comment("\n".to_string()),
                card(2, "Lightning Bolt"),
            ]
        );
    }

    #[test]
    fn reads_latin1_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        // "1 Urza’s Saga" as UTF-8 plus a stray Latin-1 byte that makes the
        // file invalid UTF-8
        tmp.write_all(b"1 Urza\xe2\x80\x99s Saga\n1 Lim-D\xfbl's Vault\n")
            .unwrap();

        let entries = read_decklist(tmp.path()).unwrap();
        assert_eq!(
            entries,
            vec![card(1, "Urza's Saga"), card(1, "Lim-Dûl's Vault")]
        );
    }

    #[test]
    fn missing_file_is_unreadable() {
        match read_decklist("/nonexistent/deck.txt") {
            Err(Error::FileUnreadable { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/deck.txt"));
            }
            other => panic!("Expected FileUnreadable, got: {other:?}"),
        }
    }

    #[test]
    fn load_recovers_with_empty_list() {
        assert!(load_decklist("/nonexistent/owned.txt").is_empty());
    }
}
