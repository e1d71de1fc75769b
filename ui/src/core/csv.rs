//! CSV snapshot of a single dashboard quarter.
//!
//! Layout, one blank line between sections:
//!
//! ```text
//! Dashboard,<label>
//! Quarter,<quarter>
//!
//! Month,<primary label>,<comparison label>
//! Jan,<value>,<value>
//! ...
//!
//! Segment,<legend title>
//! <segment>,<share>
//!
//! <summary title>,
//! <metric>,<value>
//!
//! <insights title>,        (only when the quarter has insights)
//! -,<insight>
//! ```

use super::dataset::{Dataset, MONTHS};
use super::format::format_share;
use super::resolver::find_dashboard;
use super::selection::Selection;

pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// Download name for a selection, e.g. `revenue-Q1.csv`.
pub fn csv_filename(selection: &Selection) -> String {
    format!("{}-{}.csv", selection.dashboard, selection.quarter)
}

/// Build the export for one quarter. Unknown keys produce an empty string.
pub fn build_csv(dataset: &Dataset, dashboard_key: &str, quarter_key: &str) -> String {
    let Some(dashboard) = find_dashboard(dataset, dashboard_key) else {
        return String::new();
    };
    let Some(quarter) = dashboard.quarter(quarter_key) else {
        return String::new();
    };

    let formatter = dashboard.formatter;
    let cards = &dashboard.cards;
    let mut lines: Vec<String> = Vec::new();

    lines.push(csv_row(&["Dashboard", dashboard.label]));
    lines.push(csv_row(&["Quarter", quarter_key]));
    lines.push(String::new());

    lines.push(csv_row(&[
        "Month",
        cards.bar.primary_label,
        cards.bar.comparison_label,
    ]));
    for (index, month) in MONTHS.iter().enumerate() {
        let primary = formatter.format(quarter.primary[index]);
        let comparison = quarter
            .comparison
            .map(|series| formatter.format(series[index]))
            .unwrap_or_default();
        lines.push(csv_row(&[*month, &primary, &comparison]));
    }

    lines.push(String::new());
    lines.push(csv_row(&["Segment", cards.doughnut.legend_title]));
    for &(segment, share) in quarter.segments {
        lines.push(csv_row(&[segment, &format_share(share)]));
    }

    lines.push(String::new());
    lines.push(csv_row(&[cards.summary.title, ""]));
    for &(metric, value) in quarter.summary {
        lines.push(csv_row(&[metric, value]));
    }

    if !quarter.insights.is_empty() {
        lines.push(String::new());
        lines.push(csv_row(&[cards.insights.title, ""]));
        for &insight in quarter.insights {
            lines.push(csv_row(&["-", insight]));
        }
    }

    lines.join("\n")
}

/// Quote a field only when it contains a comma, quote, or newline.
pub fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn csv_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| escape_csv(field))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::{
        BarCopy, CardCopy, Dashboard, DoughnutCopy, LineCopy, QuarterRecord, SectionCopy,
    };
    use crate::core::format::FormatterKind;

    const PLAIN: Dashboard = Dashboard {
        key: "plain",
        label: "Plain Units",
        description: "",
        formatter: FormatterKind::Text,
        cards: CardCopy {
            bar: BarCopy {
                title: "Units",
                primary_label: "Units",
                comparison_label: "Plan",
                aria_label: "",
            },
            line: LineCopy {
                title: "",
                primary_label: "",
                aria_label: "",
            },
            doughnut: DoughnutCopy {
                title: "",
                legend_title: "Units by site",
                aria_label: "",
            },
            summary: SectionCopy { title: "Totals" },
            insights: SectionCopy { title: "Notes" },
        },
        quarters: &[QuarterRecord {
            key: "H1",
            primary: [1.0, 2.5, 3.0, 1200.0],
            comparison: None,
            segments: &[("North", 0.6), ("South", 0.4)],
            summary: &[("Units", "1,206.5")],
            insights: &[],
        }],
    };

    #[test]
    fn escape_leaves_plain_fields_alone() {
        assert_eq!(escape_csv("Revenue"), "Revenue");
        assert_eq!(escape_csv(""), "");
    }

    #[test]
    fn escape_quotes_special_characters() {
        assert_eq!(escape_csv("1,795"), "\"1,795\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn revenue_q1_export_matches_layout() {
        let csv = build_csv(&Dataset::builtin(), "revenue", "Q1");
        let expected = [
            "Dashboard,Revenue Performance",
            "Quarter,Q1",
            "",
            "Month,Revenue,Target",
            "Jan,\"$120,000\",\"$115,000\"",
            "Feb,\"$135,000\",\"$130,000\"",
            "Mar,\"$128,000\",\"$125,000\"",
            "Apr,\"$142,000\",\"$140,000\"",
            "",
            "Segment,Revenue share by channel",
            "Direct,45.0%",
            "Partners,25.0%",
            "Self-serve,20.0%",
            "Enterprise,10.0%",
            "",
            "Quarterly Summary,",
            "Revenue,$525K",
            "Target,$510K",
            "YoY Growth,12.4%",
            "NPS,48",
            "",
            "Revenue Highlights & Next Steps,",
            "-,Closed the quarter $15K ahead of plan with March providing the biggest lift.",
            "-,Direct and partner channels combined for 70% of bookings—keep enablement funding intact.",
            "-,Enterprise mix trails at 10%; align with marketing on large-deal pipeline coverage.",
        ]
        .join("\n");
        assert_eq!(csv, expected);
    }

    #[test]
    fn quarter_without_comparison_or_insights() {
        let csv = build_csv(&Dataset::new(&[PLAIN]), "plain", "H1");
        let expected = [
            "Dashboard,Plain Units",
            "Quarter,H1",
            "",
            "Month,Units,Plan",
            "Jan,1,",
            "Feb,2.5,",
            "Mar,3,",
            "Apr,1200,",
            "",
            "Segment,Units by site",
            "North,60.0%",
            "South,40.0%",
            "",
            "Totals,",
            "Units,\"1,206.5\"",
        ]
        .join("\n");
        assert_eq!(csv, expected);
        assert!(!csv.contains("Notes"));
        assert!(!csv.lines().any(|line| line.starts_with("-,")));
    }

    #[test]
    fn product_export_uses_percent_formatter() {
        let csv = build_csv(&Dataset::builtin(), "product", "Q1");
        assert!(csv.contains("\nJan,52.0%,50.0%\n"));
        assert!(csv.contains("\nApr,59.0%,56.0%\n"));
    }

    #[test]
    fn quoted_insights_are_escaped() {
        let csv = build_csv(&Dataset::builtin(), "marketing", "Q1");
        assert!(csv.contains(
            "-,\"\"\"Product Launch Webinars\"\" remain the top source—tighten SDR follow-up scripts to capture momentum.\""
        ));
        assert!(csv.contains("Qualified Leads,\"1,795\""));
    }

    #[test]
    fn unknown_keys_export_nothing() {
        let data = Dataset::builtin();
        assert_eq!(build_csv(&data, "finance", "Q1"), "");
        assert_eq!(build_csv(&data, "revenue", "Q7"), "");
        assert_eq!(build_csv(&data, "", ""), "");
    }

    #[test]
    fn filename_joins_keys() {
        assert_eq!(csv_filename(&Selection::new("marketing", "Q3")), "marketing-Q3.csv");
    }
}
