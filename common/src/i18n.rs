//! シェル・見出し・主要ボタンの表示文言（英語/韓国語）

use crate::prefs::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    NavDashboard,
    NavExport,
    NavFeedback,
    DashboardTitle,
    ReviewTitle,
    ExportTitle,
    ExportDescription,
    ExportButton,
    ExportBusy,
    FeedbackLogTitle,
    Accept,
    Accepting,
    Reject,
    Rejecting,
    Loading,
    Review,
}

impl Label {
    pub fn text(self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en(),
            Language::Ko => self.ko(),
        }
    }

    fn en(self) -> &'static str {
        match self {
            Label::NavDashboard => "Dashboard",
            Label::NavExport => "Export",
            Label::NavFeedback => "Feedback",
            Label::DashboardTitle => "Dashboard",
            Label::ReviewTitle => "Review",
            Label::ExportTitle => "Export Accepted Test Cases",
            Label::ExportDescription => "Export all accepted test cases to .feature files.",
            Label::ExportButton => "Export to .feature files",
            Label::ExportBusy => "Exporting...",
            Label::FeedbackLogTitle => "Feedback Log",
            Label::Accept => "Accept",
            Label::Accepting => "Accepting...",
            Label::Reject => "Reject",
            Label::Rejecting => "Rejecting...",
            Label::Loading => "Loading...",
            Label::Review => "Review",
        }
    }

    fn ko(self) -> &'static str {
        match self {
            Label::NavDashboard => "대시보드",
            Label::NavExport => "내보내기",
            Label::NavFeedback => "피드백",
            Label::DashboardTitle => "대시보드",
            Label::ReviewTitle => "검토",
            Label::ExportTitle => "승인된 테스트 케이스 내보내기",
            Label::ExportDescription => "승인된 모든 테스트 케이스를 .feature 파일로 내보냅니다.",
            Label::ExportButton => ".feature 파일로 내보내기",
            Label::ExportBusy => "내보내는 중...",
            Label::FeedbackLogTitle => "피드백 기록",
            Label::Accept => "승인",
            Label::Accepting => "승인 중...",
            Label::Reject => "거부",
            Label::Rejecting => "거부 중...",
            Label::Loading => "불러오는 중...",
            Label::Review => "검토",
        }
    }
}
