#![cfg(test)]
//! The shells are client-only: a desktop window and a wasm page that talk to
//! an external measurement service. No Dioxus server target is wired up.

const WORKSPACE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../Cargo.toml"));
const DESKTOP: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));
const WEB: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../web/Cargo.toml"));
const DESKTOP_MAIN: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs"));

#[test]
fn no_server_features_or_profiles() {
    for (name, manifest) in [("workspace", WORKSPACE), ("desktop", DESKTOP), ("web", WEB)] {
        assert!(
            !manifest.contains("dioxus/server") && !manifest.contains("server-dev"),
            "{name} manifest still declares a server target"
        );
    }
    assert!(!DESKTOP_MAIN.contains("LaunchBuilder::server"));
}

#[test]
fn each_shell_enables_its_renderer() {
    assert!(DESKTOP.contains(r#"default = ["desktop"]"#));
    assert!(DESKTOP.contains(r#"desktop = ["dioxus/desktop"]"#));
    assert!(WEB.contains(r#"web = ["dioxus/web"]"#));
}
