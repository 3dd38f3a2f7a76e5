//! Section list parsing and column geometry.

use crate::params::PlannerParameters;

/// Splits a comma-separated section list into trimmed, non-empty names.
///
/// Order and duplicates are preserved.
pub fn parse_sections(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Horizontal span of one section column, in day-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    /// Left edge.
    pub start: f64,
    /// Right edge.
    pub end: f64,
}

impl Column {
    /// Width of the span.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Horizontal midpoint of the span.
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Evenly sized section columns to the right of the day names.
///
/// Columns share the width `page_width - content_horizontal_margin -
/// day_lines_start` with `plan_line_margin`-wide gaps between neighbours.
/// The first column starts at `day_lines_start`. There is always at least
/// one column; with too little room the width goes negative rather than
/// failing.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    width: f64,
    columns: Vec<Column>,
}

impl ColumnLayout {
    /// Computes `count` columns (floored at 1) for the given page geometry.
    pub fn new(
        page_width: f64,
        content_horizontal_margin: f64,
        day_lines_start: f64,
        plan_line_margin: f64,
        count: usize,
    ) -> Self {
        let count = count.max(1);
        let n = count as f64;
        let available = page_width - content_horizontal_margin - day_lines_start;
        let width = (available - (n - 1.0) * plan_line_margin) / n;

        let columns = (0..count)
            .map(|i| {
                let start = day_lines_start + i as f64 * (plan_line_margin + width);
                Column {
                    start,
                    end: start + width,
                }
            })
            .collect();
        Self { width, columns }
    }

    /// Columns for the sections named in `params`.
    pub fn for_params(params: &PlannerParameters) -> Self {
        Self::new(
            params.page_width,
            params.content_horizontal_margin,
            params.day_lines_start,
            params.plan_line_margin,
            params.section_names().len(),
        )
    }

    /// Width shared by every column.
    pub fn column_width(&self) -> f64 {
        self.width
    }

    /// Column spans, left to right.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns (at least 1).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always `false`; a layout has at least one column.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn parse_trims_and_drops_empty() {
        assert_eq!(parse_sections(" A, B ,,C , "), vec!["A", "B", "C"]);
    }

    #[test]
    fn parse_keeps_duplicates_in_order() {
        assert_eq!(parse_sections("Me,You,Me"), vec!["Me", "You", "Me"]);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_sections("").is_empty());
        assert!(parse_sections(" , ,").is_empty());
    }

    #[test]
    fn zero_count_is_one_column() {
        let layout = ColumnLayout::new(210.0, 26.0, 30.0, 8.0, 0);
        assert_eq!(layout.len(), 1);
        assert_abs_diff_eq!(layout.column_width(), 154.0, epsilon = 1e-12);
        assert_abs_diff_eq!(layout.columns()[0].start, 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(layout.columns()[0].end, 184.0, epsilon = 1e-12);
    }

    #[test]
    fn three_columns() {
        let layout = ColumnLayout::new(210.0, 26.0, 30.0, 8.0, 3);
        let w = (154.0 - 16.0) / 3.0;
        assert_abs_diff_eq!(layout.column_width(), w, epsilon = 1e-12);
        let starts: Vec<f64> = layout.columns().iter().map(|c| c.start).collect();
        assert_abs_diff_eq!(starts[0], 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(starts[1], 38.0 + w, epsilon = 1e-12);
        assert_abs_diff_eq!(starts[2], 46.0 + 2.0 * w, epsilon = 1e-12);
    }

    #[test]
    fn last_column_ends_at_content_edge() {
        let layout = ColumnLayout::new(148.0, 20.0, 25.0, 5.0, 4);
        let last = layout.columns().last().unwrap();
        assert_abs_diff_eq!(last.end, 148.0 - 20.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_width_does_not_panic() {
        let layout = ColumnLayout::new(40.0, 26.0, 30.0, 8.0, 5);
        assert_eq!(layout.len(), 5);
        assert!(layout.column_width() < 0.0);
    }

    #[test]
    fn column_center() {
        let c = Column {
            start: 10.0,
            end: 30.0,
        };
        assert_abs_diff_eq!(c.center(), 20.0);
        assert_abs_diff_eq!(c.width(), 20.0);
    }
}
