use dioxus::prelude::*;

use crate::core::resolver::{
    card_copy, dashboard_copy, dashboard_options, insights, quarter_options, summary_rows,
};
use crate::core::Dataset;
use crate::dashboard::{
    detect_chart_mode, ChartsPanel, DashboardState, ExportButton, InsightsCard, LanguagePicker,
    SelectionControls, SummaryCard,
};
use crate::{i18n, t};

#[component]
pub fn DashboardPage() -> Element {
    i18n::init();

    // Subscribe to the launcher's language code so chrome text re-renders on switch.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang = lang_code
        .map(|code| code())
        .unwrap_or_else(i18n::current_language);

    let dataset = Dataset::builtin();
    let mut state = use_signal(|| DashboardState::restore(&dataset));
    let chart_mode = use_hook(detect_chart_mode);

    let on_dashboard = move |key: String| {
        let changed = state.write().choose_dashboard(&dataset, &key);
        if changed {
            state.read().persist();
        }
    };
    let on_quarter = move |key: String| {
        let changed = state.write().choose_quarter(&dataset, &key);
        if changed {
            state.read().persist();
        }
    };

    let Some(selection) = state.read().selection.clone() else {
        return rsx! {
            main { class: "page page--empty", lang: "{lang}",
                h1 { class: "page__title", {t!("app-title")} }
                p { class: "card__placeholder", {t!("state-no-dashboards")} }
            }
        };
    };

    let copy = dashboard_copy(&dataset, &selection.dashboard);
    let cards = card_copy(&dataset, &selection.dashboard);
    let options = dashboard_options(&dataset);
    let quarters = quarter_options(&dataset, &selection.dashboard);
    let rows = summary_rows(&dataset, &selection.dashboard, &selection.quarter);
    let notes = insights(&dataset, &selection.dashboard, &selection.quarter);
    let export_key = format!("{}-{}", selection.dashboard, selection.quarter);

    rsx! {
        main { class: "page", lang: "{lang}",
            header { class: "page__header",
                div { class: "page__heading",
                    h1 { class: "page__title", {t!("app-title")} }
                    p { class: "page__tagline", {t!("app-tagline")} }
                }
                LanguagePicker {}
            }

            section { class: "toolbar",
                SelectionControls {
                    dashboards: options,
                    quarters,
                    dashboard: selection.dashboard.clone(),
                    quarter: selection.quarter.clone(),
                    on_dashboard,
                    on_quarter,
                }
                ExportButton { key: "{export_key}", selection: selection.clone() }
            }

            section { class: "overview",
                span { class: "badge", id: "dashboardBadge", "{copy.label}" }
                p { class: "overview__description", id: "dashboardDescription", "{copy.description}" }
            }

            ChartsPanel {
                dashboard: selection.dashboard.clone(),
                quarter: selection.quarter.clone(),
                mode: chart_mode,
            }

            div { class: "cards",
                SummaryCard { title: cards.summary.title, rows }
                InsightsCard { title: cards.insights.title, items: notes }
            }
        }
    }
}
