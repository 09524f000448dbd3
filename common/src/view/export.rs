//! エクスポート画面

use crate::api::{ApiClient, Transport};
use crate::i18n::Label;
use crate::prefs::Language;
use crate::types::ExportSummary;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExportState {
    #[default]
    Idle,
    Exporting,
    Done(ExportSummary),
    Failed(String),
}

impl ExportState {
    pub fn is_busy(&self) -> bool {
        matches!(self, ExportState::Exporting)
    }

    pub fn button_label(&self, lang: Language) -> &'static str {
        if self.is_busy() {
            Label::ExportBusy.text(lang)
        } else {
            Label::ExportButton.text(lang)
        }
    }
}

/// エクスポートを1回実行（ポーリングなし、完了まで待つ）
pub async fn run<T: Transport>(client: &ApiClient<T>) -> ExportState {
    match client.export_accepted().await {
        Ok(summary) => {
            log::info!("export finished: {} files", summary.exported_files);
            ExportState::Done(summary)
        }
        Err(e) => ExportState::Failed(e.to_string()),
    }
}
