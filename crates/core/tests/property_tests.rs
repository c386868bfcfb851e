use classify_lines_core::analyzer::{LineAnalyzer, analyze_source};
use classify_lines_core::language::get_classifier;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_counters_partition_total(
        lines in proptest::collection::vec("[ -~]{0,40}", 0..64)
    ) {
        // Printable ASCII only, so no line terminators sneak into a "line".
        let mut analyzer = LineAnalyzer::new(get_classifier("js").unwrap());
        let result = analyzer.analyze(lines.iter().map(String::as_str)).unwrap();

        prop_assert_eq!(result.total, lines.len());
        prop_assert_eq!(result.blank + result.comments + result.code, result.total);
        prop_assert!(result.imports <= result.code);
        prop_assert!(result.variables <= result.code);
    }

    #[test]
    fn test_crlf_and_lf_classify_identically(
        lines in proptest::collection::vec("[ -~]{0,40}", 0..32)
    ) {
        let lf = lines.join("\n");
        let crlf = lines.join("\r\n");
        prop_assert_eq!(
            analyze_source(&lf, "js").unwrap(),
            analyze_source(&crlf, "js").unwrap()
        );
    }

    #[test]
    fn test_fresh_classifiers_make_analysis_deterministic(
        content in "[ -~\\n]{0,400}"
    ) {
        // Re-analyzing the same content must give the same counters,
        // since every call resolves its own classifier instance.
        let first = analyze_source(&content, "js").unwrap();
        let second = analyze_source(&content, "js").unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_java_never_counts_variables(
        lines in proptest::collection::vec("[ -~]{0,40}", 0..64)
    ) {
        let mut analyzer = LineAnalyzer::new(get_classifier("java").unwrap());
        let result = analyzer.analyze(lines.iter().map(String::as_str)).unwrap();
        prop_assert_eq!(result.variables, 0);
    }
}
