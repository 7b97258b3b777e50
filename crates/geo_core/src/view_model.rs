use crate::{QueryItem, ScanStatus, SessionState};

/// Number of tested queries a free user gets to see.
pub const TEASER_QUERY_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanStatusView {
    #[default]
    Idle,
    Loading,
    Done,
    Error,
}

/// Render-ready snapshot of the session, with paid gating already applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionViewModel {
    pub paid: bool,
    pub status: ScanStatusView,
    pub url: String,
    pub score: Option<u8>,
    pub visible_queries: Vec<QueryItem>,
    pub locked_query_count: usize,
    pub error: Option<String>,
    pub can_export: bool,
    pub can_improve: bool,
    pub environment_ok: bool,
}

impl SessionViewModel {
    pub(crate) fn from_state(state: &SessionState) -> Self {
        let scan = state.scan();
        let paid = state.paid();
        let mut view = SessionViewModel {
            paid,
            url: scan.url.clone(),
            environment_ok: state.environment().is_valid,
            ..Default::default()
        };

        match &scan.status {
            ScanStatus::Idle => view.status = ScanStatusView::Idle,
            ScanStatus::Loading => view.status = ScanStatusView::Loading,
            ScanStatus::Error(message) => {
                view.status = ScanStatusView::Error;
                view.error = Some(message.clone());
            }
            ScanStatus::Done(result) => {
                view.status = ScanStatusView::Done;
                view.score = Some(result.overall_score);
                let visible = if paid {
                    result.tested_queries.len()
                } else {
                    TEASER_QUERY_COUNT.min(result.tested_queries.len())
                };
                view.visible_queries = result.tested_queries[..visible].to_vec();
                view.locked_query_count = result.tested_queries.len() - visible;
                view.can_export = paid;
                view.can_improve = paid;
            }
        }
        view
    }
}
