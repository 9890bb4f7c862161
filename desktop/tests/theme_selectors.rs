#![cfg(test)]
/*!
Selector lint for the shared theme.

The measurement page, results table and resource chart rely on these class
names. A substring check is enough to catch a rename in the stylesheet that the
components did not follow. When a selector is renamed on purpose, update the
component markup and `REQUIRED_SELECTORS` together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Measurement form and status line
    ".measure__form",
    ".measure__url",
    ".measure__notice",
    ".measure__status",
    ".measure__status--error",
    ".measure__result[hidden]",
    // Export
    ".export-panel",
    ".export-panel__meta--success",
    ".export-panel__meta--error",
    // Results table
    ".metrics-table",
    ".metrics-table__value--missing",
    // Resource chart
    ".resource-chart",
    ".resource-chart__grid",
    ".resource-chart__label",
    ".resource-chart__legend",
    ".resource-chart__swatch",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn hidden_result_region_is_not_displayed() {
    let start = THEME_CSS
        .find(".measure__result[hidden]")
        .expect("hidden result selector");
    let block = &THEME_CSS[start..];
    let end = block.find('}').expect("closing brace");
    assert!(block[..end].contains("display: none"));
}
