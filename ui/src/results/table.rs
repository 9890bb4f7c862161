use dioxus::prelude::*;

use crate::core::normalize::{DisplayRow, DisplayValue};

#[component]
pub fn MetricsTable(rows: Vec<DisplayRow>) -> Element {
    rsx! {
        table { id: "metrics-table", class: "metrics-table",
            thead {
                tr {
                    th { {crate::t!("table-metric")} }
                    th { {crate::t!("table-value")} }
                }
            }
            tbody {
                for row in rows.into_iter() {
                    tr { key: "{row.label}",
                        td { class: "metrics-table__label", "{row.label}" }
                        td { class: value_class(&row.value), "{row.value}" }
                    }
                }
            }
        }
    }
}

fn value_class(value: &DisplayValue) -> &'static str {
    match value {
        DisplayValue::Number(_) => "metrics-table__value",
        DisplayValue::Placeholder => "metrics-table__value metrics-table__value--missing",
    }
}
