use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Locale switcher. Updates the shared language signal (when the launcher
/// provides one) so localized text re-renders.
#[component]
pub fn LanguagePicker() -> Element {
    let langs = use_hook(i18n::available_languages);
    let mut current = use_signal(i18n::current_language);
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();

    if langs.len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                current.set(tag.clone());
                if let Some(mut code) = lang_code {
                    code.set(tag);
                }
            }
            Err(err) => tracing::warn!(%err, %tag, "language switch failed"),
        }
    };

    rsx! {
        div { class: "locale",
            label { class: "visually-hidden", r#for: "localeSelect", {t!("app-language")} }
            select {
                id: "localeSelect",
                class: "controls__select controls__select--compact",
                value: "{current()}",
                onchange: on_change,
                for code in langs {
                    option { key: "{code}", value: "{code}", selected: code == current(), "{code}" }
                }
            }
        }
    }
}
