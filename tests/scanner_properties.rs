use std::io::Cursor;

use proptest::prelude::*;
use textstat::scan;

fn scan_str(text: &str) -> textstat::FileReport {
    scan(Cursor::new(text.as_bytes().to_vec()), "prop").unwrap()
}

proptest! {
    #[test]
    fn blank_input_is_all_empty_lines(text in "[ \t\n]{0,64}") {
        let report = scan_str(&text);
        prop_assert_eq!(report.empty_lines, report.lines);
        prop_assert_eq!(report.words, 0);
    }

    #[test]
    fn words_never_exceed_chars(text in "\\PC{0,128}") {
        let report = scan_str(&text);
        prop_assert!(report.words <= report.chars);
        prop_assert!(report.empty_lines <= report.lines);
    }

    #[test]
    fn rescanning_gives_same_counts(text in "[a-z \n]{0,128}") {
        prop_assert_eq!(scan_str(&text), scan_str(&text));
    }

    #[test]
    fn lines_match_newlines(body in "[a-z ]{0,16}", n in 0usize..10) {
        let text = format!("{}\n", body).repeat(n);
        let report = scan_str(&text);
        prop_assert_eq!(report.lines, n as u64);
        prop_assert_eq!(report.chars, (body.chars().count() as u64 + 1) * n as u64);
    }
}
