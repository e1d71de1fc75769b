use dioxus::prelude::*;

use ui::views::DashboardPage;
use ui::{i18n, THEME_CSS};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    // Global language code; the shared picker writes it, the page keys on it.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        // Remount on language change so every localized string is refreshed.
        div { key: "{lang_code()}", class: "app",
            DashboardPage {}
        }
    }
}
