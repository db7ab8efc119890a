// Client-side state model (no rendering, no transport)
pub mod state;

pub use state::{reduce, ClientState, Event, Filter, ViewState};
