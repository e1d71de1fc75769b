use dioxus::prelude::*;

use crate::core::resolver::DashboardOption;
use crate::t;

/// Dashboard and quarter pickers. Emits the chosen key; validation happens upstream.
#[component]
pub fn SelectionControls(
    dashboards: Vec<DashboardOption>,
    quarters: Vec<&'static str>,
    dashboard: String,
    quarter: String,
    on_dashboard: EventHandler<String>,
    on_quarter: EventHandler<String>,
) -> Element {
    rsx! {
        form { class: "controls", onsubmit: move |evt: FormEvent| evt.prevent_default(),
            div { class: "controls__field",
                label { class: "controls__label", r#for: "dashboardSelect", {t!("control-dashboard")} }
                select {
                    id: "dashboardSelect",
                    class: "controls__select",
                    value: "{dashboard}",
                    onchange: move |evt: FormEvent| on_dashboard.call(evt.value()),
                    for entry in dashboards {
                        option {
                            key: "{entry.key}",
                            value: "{entry.key}",
                            selected: entry.key == dashboard,
                            "{entry.label}"
                        }
                    }
                }
            }
            div { class: "controls__field",
                label { class: "controls__label", r#for: "quarterSelect", {t!("control-quarter")} }
                select {
                    id: "quarterSelect",
                    class: "controls__select",
                    value: "{quarter}",
                    onchange: move |evt: FormEvent| on_quarter.call(evt.value()),
                    for key in quarters {
                        option {
                            key: "{key}",
                            value: "{key}",
                            selected: key == quarter,
                            "{key}"
                        }
                    }
                }
            }
        }
    }
}
