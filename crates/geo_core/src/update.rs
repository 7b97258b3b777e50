use crate::{Effect, Msg, ScanStatus, SessionState};

/// Points added to the overall score by one "improve score" action.
pub const IMPROVE_SCORE_POINTS: u8 = 10;

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    let effects = match msg {
        Msg::Initialized {
            stored_paid,
            payment_returned,
            environment,
        } => {
            state.set_environment(environment);
            if payment_returned {
                // The marker wins over storage and is consumed so a reload
                // does not process it again.
                state.set_paid(true);
                vec![Effect::PersistPaid(true), Effect::ClearReturnMarker]
            } else {
                state.set_paid(stored_paid);
                Vec::new()
            }
        }
        Msg::ScanStarted(url) => {
            state.set_scan(url.clone(), ScanStatus::Loading);
            vec![Effect::RunScan { url }]
        }
        Msg::ScanCompleted(result) => {
            state.set_status(ScanStatus::Done(result));
            Vec::new()
        }
        Msg::ScanFailed(message) => {
            state.set_status(ScanStatus::Error(message));
            Vec::new()
        }
        Msg::ScanReset => {
            state.set_scan(String::new(), ScanStatus::Idle);
            Vec::new()
        }
        Msg::PaidChanged(paid) => {
            state.set_paid(paid);
            vec![Effect::PersistPaid(paid)]
        }
        Msg::ImproveScore => {
            if let Some(result) = state.result_mut() {
                result.raise_score(IMPROVE_SCORE_POINTS);
                result.cite_first_uncited();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
