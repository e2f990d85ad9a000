//! Terminal client for a wishlist REST service
//!
//! Redux/Elm-style architecture: components are pure functions of state
//! and emit actions, a single reducer owns every state transition, and
//! HTTP work runs as effects whose completion actions come back through
//! the same channel the UI feeds.
//!
//! The two-phase action pattern keeps async out of the reducer:
//! `Submit(op)` snapshots the form into a request and declares an effect;
//! the runtime spawns the call and the result lands as `WishlistDidLoad`,
//! `ItemDidLoad`, `SearchDidLoad`, `DeleteDidSucceed` or `RequestDidFail`.
//! Completions apply in arrival order with no request correlation, so
//! overlapping submissions race and the last writer wins.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod event;
pub mod query;
pub mod reducer;
pub mod request;
pub mod runtime;
pub mod state;
pub mod testing;

pub use action::{Action, Operation};
pub use api::{ApiClient, ApiError};
pub use effect::{DispatchResult, Effect};
pub use event::EventKind;
pub use reducer::{GENERIC_FAILURE, reducer};
pub use request::ApiRequest;
pub use runtime::Runtime;
pub use state::{AppState, Flash, FlashLevel, FormField, FormState, Wishlist, WishlistItem};
