//! GEO core: data model, pure session state machine, observable store and
//! view-model helpers.
mod capability;
mod effect;
mod location;
mod msg;
mod state;
mod store;
mod types;
mod update;
mod view_model;

pub use capability::{
    MemoryStorage, NoReturnLocation, PaidFlagStorage, ReturnLocation, StorageError,
};
pub use effect::Effect;
pub use location::{
    has_payment_marker, strip_payment_marker, UrlReturnLocation, PAYMENT_MARKER_PARAM,
};
pub use msg::Msg;
pub use state::{EnvironmentReport, ScanState, ScanStatus, SessionState};
pub use store::{SessionStore, SubscriptionId};
pub use types::{
    CitationItem, CitationPosition, Faq, GeoResult, JsonLdType, MockError, QueryItem,
    Recommendations, MAX_SCORE,
};
pub use update::{update, IMPROVE_SCORE_POINTS};
pub use view_model::{ScanStatusView, SessionViewModel, TEASER_QUERY_COUNT};
