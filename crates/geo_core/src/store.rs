use geo_logging::{geo_debug, geo_error, geo_warn};

use crate::{
    update, Effect, EnvironmentReport, GeoResult, Msg, PaidFlagStorage, ReturnLocation,
    SessionState, SessionViewModel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&SessionViewModel)>;

/// Single authoritative session store.
///
/// Owns the [`SessionState`], runs persistence effects against its platform
/// capabilities and notifies subscribers with a fresh view after every
/// change. Effects it cannot run itself (scans) are handed back to the caller.
pub struct SessionStore {
    state: SessionState,
    storage: Box<dyn PaidFlagStorage>,
    location: Box<dyn ReturnLocation>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl SessionStore {
    pub fn new(storage: Box<dyn PaidFlagStorage>, location: Box<dyn ReturnLocation>) -> Self {
        Self {
            state: SessionState::new(),
            storage,
            location,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> SessionViewModel {
        self.state.view()
    }

    /// Registers `callback`; it is called right away with the current view
    /// and again after every state change.
    pub fn subscribe<F>(&mut self, mut callback: F) -> SubscriptionId
    where
        F: FnMut(&SessionViewModel) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        callback(&self.state.view());
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Restores the paid flag, consumes a payment-return marker and records
    /// the environment report.
    pub fn initialize(&mut self, environment: EnvironmentReport) -> Vec<Effect> {
        let stored_paid = match self.storage.load() {
            Ok(paid) => paid,
            Err(err) => {
                geo_warn!("Paid flag storage unavailable, defaulting to free mode: {}", err);
                false
            }
        };
        let payment_returned = match self.location.has_payment_marker() {
            Ok(found) => found,
            Err(err) => {
                geo_warn!("Unable to check location for payment marker: {}", err);
                false
            }
        };

        if !environment.warnings.is_empty() {
            geo_warn!("Environment configuration warnings: {:?}", environment.warnings);
        }
        if !environment.errors.is_empty() {
            geo_error!("Environment configuration errors: {:?}", environment.errors);
        }

        self.dispatch(Msg::Initialized {
            stored_paid,
            payment_returned,
            environment,
        })
    }

    /// Starts a scan; the returned effects contain the `RunScan` request.
    pub fn start_scan(&mut self, url: impl Into<String>) -> Vec<Effect> {
        self.dispatch(Msg::ScanStarted(url.into()))
    }

    pub fn complete_scan(&mut self, result: GeoResult) {
        self.dispatch(Msg::ScanCompleted(result));
    }

    pub fn error_scan(&mut self, message: impl Into<String>) {
        self.dispatch(Msg::ScanFailed(message.into()));
    }

    pub fn reset_scan(&mut self) {
        self.dispatch(Msg::ScanReset);
    }

    pub fn set_paid_state(&mut self, paid: bool) {
        self.dispatch(Msg::PaidChanged(paid));
    }

    pub fn upgrade_to_paid(&mut self) {
        self.set_paid_state(true);
    }

    pub fn improve_score(&mut self) {
        self.dispatch(Msg::ImproveScore);
    }

    /// Applies `msg`, runs storage/location effects, notifies subscribers and
    /// returns the effects left for the caller.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let pending: Vec<Effect> = effects
            .into_iter()
            .filter_map(|effect| self.run_local_effect(effect))
            .collect();

        if self.state.consume_dirty() {
            self.notify();
        }
        pending
    }

    fn run_local_effect(&mut self, effect: Effect) -> Option<Effect> {
        match effect {
            Effect::PersistPaid(paid) => {
                if let Err(err) = self.storage.store(paid) {
                    geo_warn!("Paid flag not persisted: {}", err);
                }
                None
            }
            Effect::ClearReturnMarker => {
                if let Err(err) = self.location.clear_payment_marker() {
                    geo_warn!("Unable to clean payment marker from location: {}", err);
                }
                None
            }
            other => Some(other),
        }
    }

    fn notify(&mut self) {
        let view = self.state.view();
        geo_debug!(
            "Session changed: paid={} status={:?} subscribers={}",
            view.paid,
            view.status,
            self.subscribers.len()
        );
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&view);
        }
    }
}
