//! Domain layer between `carsense-api` and the widget surface.
//!
//! This crate owns the two pieces of real interactive-state logic in the
//! workspace, plus the reactive state they hang off:
//!
//! - **[`resolver`]** — maps semantic roles ("fuel level", "park brake")
//!   onto concrete registry entities by the integration's prefix/suffix
//!   naming convention. Total: every role always resolves, matched or
//!   placeholder.
//! - **[`Navigator`]** — the sub-view state machine: toggle-open, cyclic
//!   next/previous over the four content views, map overlay outside the
//!   cycle.
//! - **[`SwipeTracker`]** — press/move/release swipe recognition as an
//!   explicit state machine over an abstract pointer stream.
//! - **[`StateStore`]** — watch-backed snapshots of entity states and the
//!   resolved role mapping; reads are synchronous, writes are wholesale
//!   atomic replacements (last write wins).
//! - **[`format`]** — locale-aware number formatting and display
//!   summaries.

pub mod error;
pub mod format;
pub mod gesture;
pub mod model;
pub mod navigator;
pub mod resolver;
pub mod store;

pub use error::CoreError;
pub use format::Locale;
pub use gesture::{PointerEvent, SwipeDirection, SwipeTracker};
pub use model::{
    EntityId, EntityState, ResolvedEntity, RoleFilter, TripRole, WarningRole, trip_filters,
    warning_filters,
};
pub use navigator::{CardView, Navigator};
pub use resolver::{EntityRegistry, ResolvedEntities, resolve, resolve_all};
pub use store::StateStore;
