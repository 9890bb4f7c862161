use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::config::MeasureConfig;
use ui::measure::MeasureSession;
use ui::views::Measure;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Measure {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // The measurement service is served next to the page.
    use_context_provider(MeasureConfig::same_origin);
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    // Above the keyed subtree so a language switch keeps the last report.
    use_context_provider(MeasureSession::new);

    rsx! {
        document::Title { "WebPerf" }
        document::Style { "{ui::THEME_CSS}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout: shared navbar above the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
