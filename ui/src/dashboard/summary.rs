use dioxus::prelude::*;

use crate::core::resolver::SummaryRow;
use crate::t;

#[component]
pub fn SummaryCard(title: &'static str, rows: Vec<SummaryRow>) -> Element {
    rsx! {
        article { class: "card card--summary",
            header { class: "card__header",
                h2 { class: "card__title", "{title}" }
            }
            div { class: "card__body",
                if rows.is_empty() {
                    p { class: "card__placeholder", {t!("summary-empty")} }
                } else {
                    table { class: "summary-table",
                        thead {
                            tr {
                                th { scope: "col", {t!("summary-metric")} }
                                th { scope: "col", {t!("summary-value")} }
                            }
                        }
                        tbody {
                            for row in rows {
                                tr { key: "{row.metric}",
                                    th { scope: "row", "{row.metric}" }
                                    td { "{row.value}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
