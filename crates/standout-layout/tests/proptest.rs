//! Property-based tests for table layout using proptest.

use proptest::prelude::*;
use standout_layout::{display_width, resolve_widths, Table};

// ============================================================================
// Test helpers
// ============================================================================

fn rows_strategy(cell: &'static str) -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(cell, 0..=4), 0..8)
}

fn build(rows: &[Vec<String>], line_length: usize, separator: usize, wrap: bool) -> Table {
    let mut table = Table::new()
        .line_length(line_length)
        .separator_spaces(separator)
        .wrap(wrap);
    for row in rows {
        table.add_row(row);
    }
    table
}

/// Cells mixing SGR styling, OSC 8 hyperlinks, emoji sequences and CJK.
const STYLED_CELL: &str = "(a|b| |\u{2764}\u{fe0f}|\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}|日|\x1b\\[1m|\x1b\\[0m|\x1b\\]8;;u\x1b\\\\){0,12}";

/// A line length that leaves every column at least `min_cap` cells.
fn line_length_for(rows: &[Vec<String>], separator: usize, min_cap: usize, extra: usize) -> usize {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    columns.saturating_sub(1) * separator + columns * min_cap + extra
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// No physical line is wider than the line length.
    #[test]
    fn lines_fit_line_length(
        rows in rows_strategy("[a-z \n]{0,24}"),
        separator in 0usize..4,
        extra in 0usize..40,
        wrap in any::<bool>(),
    ) {
        let line_length = line_length_for(&rows, separator, 1, extra).max(1);
        let table = build(&rows, line_length, separator, wrap);
        for line in table.render().split('\n') {
            prop_assert!(
                display_width(line) <= line_length,
                "line {:?} wider than {}", line, line_length
            );
        }
    }

    /// Wide characters fit too, as long as each column can hold one of them.
    #[test]
    fn wide_characters_fit_line_length(
        rows in rows_strategy("[a-z日本語 ]{0,12}"),
        separator in 0usize..3,
        extra in 0usize..30,
        wrap in any::<bool>(),
    ) {
        let line_length = line_length_for(&rows, separator, 2, extra).max(1);
        let table = build(&rows, line_length, separator, wrap);
        for line in table.render().split('\n') {
            prop_assert!(display_width(line) <= line_length);
        }
    }

    /// Every physical line spans all columns, whatever the row's own length.
    #[test]
    fn every_line_spans_all_columns(
        rows in rows_strategy("[a-z ]{0,16}"),
        separator in 0usize..4,
        extra in 0usize..40,
        wrap in any::<bool>(),
    ) {
        let line_length = line_length_for(&rows, separator, 1, extra).max(1);
        let table = build(&rows, line_length, separator, wrap);
        let widths = table.column_widths();
        let expected = widths.total() + widths.len().saturating_sub(1) * separator;

        let output = table.render();
        if rows.is_empty() {
            prop_assert_eq!(output, "");
        } else {
            for line in output.split('\n') {
                prop_assert_eq!(display_width(line), expected);
            }
        }
    }

    /// Rendering twice gives the same bytes.
    #[test]
    fn render_is_deterministic(
        rows in rows_strategy("[a-zA-Z0-9 \n]{0,30}"),
        line_length in 0usize..60,
        separator in 0usize..4,
        wrap in any::<bool>(),
    ) {
        let table = build(&rows, line_length, separator, wrap);
        prop_assert_eq!(table.render(), table.render());
    }

    /// Each row yields at least one physical line; wrapping only adds lines.
    #[test]
    fn wrapping_never_drops_rows(
        rows in rows_strategy("[a-z ]{0,30}"),
        separator in 0usize..3,
        extra in 0usize..20,
    ) {
        prop_assume!(!rows.is_empty());
        let line_length = line_length_for(&rows, separator, 1, extra).max(1);
        let truncated = build(&rows, line_length, separator, false).render();
        let wrapped = build(&rows, line_length, separator, true).render();
        prop_assert_eq!(truncated.split('\n').count(), rows.len());
        prop_assert!(wrapped.split('\n').count() >= rows.len());
    }

    /// Resolved widths never exceed natural widths, and use the budget when they can.
    #[test]
    fn resolved_widths_respect_budget(
        natural in prop::collection::vec(0usize..40, 1..6),
        line_length in 1usize..120,
        separator in 0usize..4,
    ) {
        let resolved = resolve_widths(&natural, line_length, separator);
        let separators = (natural.len() - 1) * separator;

        for (got, wanted) in resolved.iter().zip(&natural) {
            prop_assert!(got <= *wanted);
        }
        if separators <= line_length {
            prop_assert!(resolved.total() + separators <= line_length);
        }
        let natural_total: usize = natural.iter().sum();
        if natural_total + separators <= line_length {
            prop_assert_eq!(resolved.widths, natural);
        }
    }

    /// Styled, hyperlinked and emoji content fits by terminal width too.
    #[test]
    fn escapes_and_emoji_fit_line_length(
        rows in rows_strategy(STYLED_CELL),
        separator in 0usize..3,
        extra in 0usize..30,
        wrap in any::<bool>(),
    ) {
        let line_length = line_length_for(&rows, separator, 2, extra).max(1);
        let table = build(&rows, line_length, separator, wrap);
        for line in table.render().split('\n') {
            prop_assert!(
                console::measure_text_width(line) <= line_length,
                "line {:?} wider than {}", line, line_length
            );
        }
    }

    /// Any configuration and content renders without panicking.
    #[test]
    fn never_panics(
        rows in rows_strategy("(\\PC|\x1b|\\[|\\]|\u{200d}|\u{fe0f}){0,20}"),
        line_length in 0usize..20,
        separator in 0usize..6,
        wrap in any::<bool>(),
    ) {
        let table = build(&rows, line_length, separator, wrap);
        let _ = table.render();
    }
}
