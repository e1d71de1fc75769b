//! Bar, line and doughnut cards.
//!
//! On the web, when Chart.js is loaded (`window.Chart`), the cards hold
//! canvases and a small script pushes the current quarter into them.
//! Everywhere else the same data is rendered as tables and a definition list.

use dioxus::prelude::*;
use serde::Serialize;

use crate::core::dataset::CardCopy;
use crate::core::format::format_share;
use crate::core::resolver::{card_copy, find_dashboard};
use crate::core::{Dataset, MONTHS};
use crate::t;

pub const BAR_CANVAS_ID: &str = "barChart";
pub const LINE_CANVAS_ID: &str = "lineChart";
pub const DOUGHNUT_CANVAS_ID: &str = "doughnutChart";

/// Placeholder for a comparison value the quarter doesn't have.
const MISSING_VALUE: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMode {
    Library,
    Fallback,
}

/// Chart.js is only ever present in the browser.
pub fn detect_chart_mode() -> ChartMode {
    #[cfg(target_arch = "wasm32")]
    let mode = {
        let present = web_sys::window()
            .map(|window| {
                js_sys::Reflect::has(&window, &wasm_bindgen::JsValue::from_str("Chart"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if present {
            ChartMode::Library
        } else {
            ChartMode::Fallback
        }
    };

    #[cfg(not(target_arch = "wasm32"))]
    let mode = ChartMode::Fallback;

    tracing::info!(?mode, "chart mode detected");
    mode
}

/// Everything the chart script needs for one quarter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub months: Vec<&'static str>,
    pub formatter: &'static str,
    pub bar: BarSeries,
    pub line: LineSeries,
    pub doughnut: DoughnutSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    pub primary_label: &'static str,
    pub comparison_label: &'static str,
    pub primary: Vec<f64>,
    pub primary_display: Vec<String>,
    pub comparison: Option<Vec<f64>>,
    pub comparison_display: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub label: &'static str,
    pub values: Vec<f64>,
    pub display: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoughnutSeries {
    pub legend_title: &'static str,
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
    pub display: Vec<String>,
}

/// `None` when the dashboard or quarter doesn't exist.
pub fn chart_payload(dataset: &Dataset, dashboard_key: &str, quarter_key: &str) -> Option<ChartPayload> {
    let dashboard = find_dashboard(dataset, dashboard_key)?;
    let quarter = dashboard.quarter(quarter_key)?;
    let formatter = dashboard.formatter;
    let display = |values: &[f64]| values.iter().map(|&v| formatter.format(v)).collect::<Vec<_>>();

    Some(ChartPayload {
        months: MONTHS.to_vec(),
        formatter: formatter.name(),
        bar: BarSeries {
            primary_label: dashboard.cards.bar.primary_label,
            comparison_label: dashboard.cards.bar.comparison_label,
            primary: quarter.primary.to_vec(),
            primary_display: display(&quarter.primary),
            comparison: quarter.comparison.map(|series| series.to_vec()),
            comparison_display: quarter
                .comparison
                .map(|series| display(&series))
                .unwrap_or_default(),
        },
        line: LineSeries {
            label: dashboard.cards.line.primary_label,
            values: quarter.primary.to_vec(),
            display: display(&quarter.primary),
        },
        doughnut: DoughnutSeries {
            legend_title: dashboard.cards.doughnut.legend_title,
            labels: quarter.segments.iter().map(|&(label, _)| label).collect(),
            values: quarter.segments.iter().map(|&(_, share)| share).collect(),
            display: quarter
                .segments
                .iter()
                .map(|&(_, share)| format_share(share))
                .collect(),
        },
    })
}

const RENDER_SCRIPT: &str = r##"
(function (payload) {
  const Chart = window.Chart;
  if (!Chart) return;
  const registry = (window.__pulseboardCharts = window.__pulseboardCharts || {});
  const reduceMotion =
    typeof window.matchMedia === "function" &&
    window.matchMedia("(prefers-reduced-motion: reduce)").matches;
  const palette = {
    primary: "#6366F1",
    primaryLight: "rgba(99, 102, 241, 0.1)",
    comparison: "#CBD5F5",
    doughnut: ["#6366F1", "#0EA5E9", "#22C55E", "#F59E0B"],
  };
  const draw = (id, config) => {
    if (registry[id]) {
      registry[id].destroy();
      delete registry[id];
    }
    const canvas = document.getElementById(id);
    if (canvas && config) registry[id] = new Chart(canvas, config);
  };
  if (!payload) {
    ["barChart", "lineChart", "doughnutChart"].forEach((id) => draw(id, null));
    return;
  }
  const ticks = {
    currency: (v) => "$" + Number(v).toLocaleString("en-US"),
    number: (v) => Number(v).toLocaleString("en-US"),
    percent: (v) => Math.round(Number(v) * 100) + "%",
  }[payload.formatter] || ((v) => v);
  const grid = { color: "rgba(148, 163, 184, 0.2)" };
  const options = (label, extra) => Object.assign({
    maintainAspectRatio: false,
    responsive: true,
    animation: reduceMotion ? false : { duration: 600, easing: "easeOutQuart" },
    interaction: { intersect: false, mode: "index" },
    plugins: {
      legend: { display: false },
      tooltip: {
        backgroundColor: "#0f172a",
        padding: 12,
        callbacks: { label: (ctx) => `${label(ctx)}: ${ctx.dataset.display[ctx.dataIndex]}` },
      },
    },
  }, extra);
  const axes = {
    scales: {
      x: { ticks: { color: "#475569" }, grid },
      y: { ticks: { color: "#475569", callback: ticks }, grid },
    },
  };

  const bar = payload.bar;
  const barSets = [{
    label: bar.primaryLabel,
    data: bar.primary,
    display: bar.primaryDisplay,
    backgroundColor: palette.primary,
    borderRadius: 10,
    maxBarThickness: 48,
  }];
  if (bar.comparison) {
    barSets.push({
      label: bar.comparisonLabel,
      data: bar.comparison,
      display: bar.comparisonDisplay,
      backgroundColor: palette.comparison,
      borderRadius: 10,
      maxBarThickness: 48,
    });
  }
  draw("barChart", {
    type: "bar",
    data: { labels: payload.months, datasets: barSets },
    options: options((ctx) => ctx.dataset.label, axes),
  });

  draw("lineChart", {
    type: "line",
    data: {
      labels: payload.months,
      datasets: [{
        label: payload.line.label,
        data: payload.line.values,
        display: payload.line.display,
        borderColor: palette.primary,
        backgroundColor: palette.primaryLight,
        tension: 0.4,
        fill: true,
        pointBackgroundColor: "#ffffff",
        pointBorderWidth: 2,
        pointHoverRadius: 6,
      }],
    },
    options: options((ctx) => ctx.dataset.label, axes),
  });

  const doughnut = options((ctx) => ctx.label, { cutout: "62%" });
  doughnut.interaction = { intersect: true, mode: "nearest" };
  doughnut.plugins.legend = {
    position: "right",
    labels: { boxWidth: 16, boxHeight: 16, color: "#334155" },
    title: { display: true, text: payload.doughnut.legendTitle, color: "#1e293b", font: { weight: 600 } },
  };
  draw("doughnutChart", {
    type: "doughnut",
    data: {
      labels: payload.doughnut.labels,
      datasets: [{
        data: payload.doughnut.values,
        display: payload.doughnut.display,
        backgroundColor: palette.doughnut,
        hoverOffset: 8,
      }],
    },
    options: doughnut,
  });
})(__PAYLOAD__);
"##;

/// Script that redraws (or, for `None`, tears down) all three charts.
pub fn chart_script(payload: Option<&ChartPayload>) -> Result<String, serde_json::Error> {
    let json = match payload {
        Some(payload) => serde_json::to_string(payload)?,
        None => "null".to_string(),
    };
    Ok(RENDER_SCRIPT.replace("__PAYLOAD__", &json))
}

#[component]
pub fn ChartsPanel(
    dashboard: ReadOnlySignal<String>,
    quarter: ReadOnlySignal<String>,
    mode: ChartMode,
) -> Element {
    let dataset = Dataset::builtin();

    use_effect(move || {
        let dashboard_key = dashboard();
        let quarter_key = quarter();
        if mode != ChartMode::Library {
            return;
        }
        let payload = chart_payload(&dataset, &dashboard_key, &quarter_key);
        match chart_script(payload.as_ref()) {
            Ok(script) => {
                document::eval(&script);
            }
            Err(err) => tracing::warn!(%err, "could not encode chart payload"),
        }
    });

    let dashboard_key = dashboard();
    let quarter_key = quarter();
    let cards = card_copy(&dataset, &dashboard_key);
    let payload = chart_payload(&dataset, &dashboard_key, &quarter_key);

    rsx! {
        section { class: "charts",
            if mode == ChartMode::Fallback {
                p { class: "charts__note", {t!("fallback-note")} }
            }
            div { class: "charts__grid",
                ChartCard {
                    title: cards.bar.title,
                    aria_label: cards.bar.aria_label,
                    wide: true,
                    if mode == ChartMode::Library && payload.is_some() {
                        canvas { id: BAR_CANVAS_ID, role: "img", aria_label: cards.bar.aria_label }
                    } else {
                        BarFallback { payload: payload.clone() }
                    }
                }
                ChartCard {
                    title: cards.line.title,
                    aria_label: cards.line.aria_label,
                    wide: false,
                    if mode == ChartMode::Library && payload.is_some() {
                        canvas { id: LINE_CANVAS_ID, role: "img", aria_label: cards.line.aria_label }
                    } else {
                        LineFallback { payload: payload.clone() }
                    }
                }
                ChartCard {
                    title: cards.doughnut.title,
                    aria_label: cards.doughnut.aria_label,
                    wide: false,
                    if mode == ChartMode::Library && payload.is_some() {
                        canvas { id: DOUGHNUT_CANVAS_ID, role: "img", aria_label: cards.doughnut.aria_label }
                    } else {
                        DoughnutFallback { payload: payload.clone(), cards }
                    }
                }
            }
        }
    }
}

#[component]
fn ChartCard(title: &'static str, aria_label: &'static str, wide: bool, children: Element) -> Element {
    let class = if wide { "card card--chart card--wide" } else { "card card--chart" };
    rsx! {
        article { class: "{class}", aria_label: "{aria_label}",
            header { class: "card__header",
                h2 { class: "card__title", "{title}" }
            }
            div { class: "card__body chart-frame", {children} }
        }
    }
}

#[component]
fn BarFallback(payload: Option<ChartPayload>) -> Element {
    let Some(payload) = payload else {
        return rsx! { p { class: "chart-fallback__empty", {t!("fallback-bar-empty")} } };
    };
    let rows = payload
        .months
        .iter()
        .enumerate()
        .map(|(index, &month)| {
            let actual = payload.bar.primary_display[index].clone();
            let target = payload
                .bar
                .comparison_display
                .get(index)
                .cloned()
                .unwrap_or_else(|| MISSING_VALUE.to_string());
            (month, actual, target)
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "chart-fallback",
            table { class: "chart-fallback__table",
                thead {
                    tr {
                        th { scope: "col", {t!("fallback-month")} }
                        th { scope: "col", {t!("fallback-actual")} }
                        th { scope: "col", {t!("fallback-target")} }
                    }
                }
                tbody {
                    for (month, actual, target) in rows {
                        tr { key: "{month}",
                            th { scope: "row", "{month}" }
                            td { "{actual}" }
                            td { "{target}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LineFallback(payload: Option<ChartPayload>) -> Element {
    let Some(payload) = payload else {
        return rsx! { p { class: "chart-fallback__empty", {t!("fallback-line-empty")} } };
    };
    let rows = payload
        .months
        .iter()
        .copied()
        .zip(payload.line.display.iter().cloned())
        .collect::<Vec<_>>();

    rsx! {
        div { class: "chart-fallback",
            table { class: "chart-fallback__table",
                thead {
                    tr {
                        th { scope: "col", {t!("fallback-month")} }
                        th { scope: "col", {t!("fallback-value")} }
                    }
                }
                tbody {
                    for (month, value) in rows {
                        tr { key: "{month}",
                            th { scope: "row", "{month}" }
                            td { "{value}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DoughnutFallback(payload: Option<ChartPayload>, cards: CardCopy) -> Element {
    let segments = payload
        .map(|payload| {
            payload
                .doughnut
                .labels
                .into_iter()
                .zip(payload.doughnut.display)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    if segments.is_empty() {
        return rsx! { p { class: "chart-fallback__empty", {t!("fallback-doughnut-empty")} } };
    }

    rsx! {
        div { class: "chart-fallback",
            if !cards.doughnut.legend_title.is_empty() {
                p { class: "chart-fallback__caption", "{cards.doughnut.legend_title}" }
            }
            dl { class: "chart-fallback__list",
                for (label, share) in segments {
                    div { key: "{label}", class: "chart-fallback__item",
                        dt { "{label}" }
                        dd { "{share}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_mirrors_the_quarter() {
        let payload = chart_payload(&Dataset::builtin(), "revenue", "Q1").unwrap();
        assert_eq!(payload.months, ["Jan", "Feb", "Mar", "Apr"]);
        assert_eq!(payload.formatter, "currency");
        assert_eq!(payload.bar.primary_label, "Revenue");
        assert_eq!(payload.bar.primary_display[1], "$135,000");
        assert_eq!(payload.bar.comparison.as_ref().map(Vec::len), Some(4));
        assert_eq!(payload.line.values, payload.bar.primary);
        assert_eq!(payload.doughnut.labels, ["Direct", "Partners", "Self-serve", "Enterprise"]);
        assert_eq!(payload.doughnut.display[0], "45.0%");
    }

    #[test]
    fn payload_for_unknown_keys_is_none() {
        let data = Dataset::builtin();
        assert!(chart_payload(&data, "revenue", "Q9").is_none());
        assert!(chart_payload(&data, "finance", "Q1").is_none());
    }

    #[test]
    fn script_embeds_json_payload() {
        let payload = chart_payload(&Dataset::builtin(), "product", "Q2").unwrap();
        let script = chart_script(Some(&payload)).unwrap();
        assert!(!script.contains("__PAYLOAD__"));
        assert!(script.contains(r#""formatter":"percent""#));
        assert!(script.contains(r#""legendTitle":"#));
        assert!(script.contains(BAR_CANVAS_ID));
    }

    #[test]
    fn teardown_script_passes_null() {
        let script = chart_script(None).unwrap();
        assert!(script.trim_end().ends_with("})(null);"));
    }

    #[test]
    fn desktop_never_finds_the_chart_library() {
        #[cfg(not(target_arch = "wasm32"))]
        assert_eq!(detect_chart_mode(), ChartMode::Fallback);
    }
}
