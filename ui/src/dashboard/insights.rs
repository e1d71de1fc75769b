use dioxus::prelude::*;

use crate::t;

#[component]
pub fn InsightsCard(title: &'static str, items: Vec<&'static str>) -> Element {
    rsx! {
        article { class: "card card--insights",
            header { class: "card__header",
                h2 { class: "card__title", "{title}" }
            }
            div { class: "card__body",
                if items.is_empty() {
                    p { class: "card__placeholder", {t!("insights-empty")} }
                } else {
                    ul { class: "insights",
                        for (index, item) in items.into_iter().enumerate() {
                            li { key: "{index}", class: "insights__item", "{item}" }
                        }
                    }
                }
            }
        }
    }
}
