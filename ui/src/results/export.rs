use dioxus::prelude::*;
use time::OffsetDateTime;
use tracing::info;

use crate::core::controller::MeasurementController;
use crate::core::export::ExportArtifact;
use crate::core::platform;
use crate::measure::raise_prompt;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

/// Download button for the last successful report.
#[component]
pub fn ExportPanel(
    controller: Signal<MeasurementController>,
    notice: Signal<Option<String>>,
) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working => Some((
            "export-panel__meta".to_string(),
            format!("{}…", crate::t!("export-working")),
        )),
        ExportStatus::Done(message) => Some((
            "export-panel__meta export-panel__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "export-panel__meta export-panel__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let download_handler = {
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            let artifact = controller.with(|c| c.export_last(OffsetDateTime::now_utc()));
            let artifact = match artifact {
                Ok(artifact) => artifact,
                Err(err) if err.is_prompt() => {
                    raise_prompt(&err, notice);
                    return;
                }
                Err(err) => {
                    status_signal.set(ExportStatus::Error(err.to_string()));
                    return;
                }
            };

            busy_signal.set(true);
            status_signal.set(ExportStatus::Working);
            spawn(async move {
                match save_artifact(artifact).await {
                    Ok(message) => status_signal.set(ExportStatus::Done(message)),
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            });
        }
    };

    rsx! {
        div { class: "export-panel",
            button {
                id: "download-report",
                r#type: "button",
                class: "button",
                disabled: busy(),
                onclick: download_handler,
                {crate::t!("export-button")}
            }
            if let Some((class_name, message)) = feedback {
                span { class: "{class_name}", "{message}" }
            }
        }
    }
}

async fn save_artifact(artifact: ExportArtifact) -> Result<String, String> {
    let ExportArtifact {
        filename,
        mime,
        bytes,
    } = artifact;
    let size = bytes.len();
    let delivery = platform::download_bytes(&filename, mime, bytes).await?;
    info!(filename = filename.as_str(), bytes = size, "report exported");
    Ok(match delivery {
        Some(path) => crate::t!("export-saved", path = path),
        None => crate::t!("export-started", filename = filename),
    })
}
