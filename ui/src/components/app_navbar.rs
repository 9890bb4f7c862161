use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;

/// Application header: brand plus a language picker when more than one locale
/// is embedded.
///
/// Selecting a language switches the shared loader and, if the platform
/// provided a `Signal<String>` language code through the context, updates it so
/// keyed subtrees remount with fresh strings.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    // Obtain global language code signal if the platform provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Remounted on every language switch; start from what is actually selected.
    let mut current_lang =
        use_signal(move || initial_language(lang_code_ctx.map(|code| code.peek().clone())));
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Establish a reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let tagline = t!("brand-tagline");

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "WebPerf" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}

/// The shared language code when the shell provides one, else the loader's.
fn initial_language(shared: Option<String>) -> String {
    shared
        .filter(|code| !code.is_empty())
        .unwrap_or_else(i18n::current_language)
}
