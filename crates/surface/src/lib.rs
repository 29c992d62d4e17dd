//! Applying edit scripts to stateful, position-indexed list surfaces.
//!
//! An edit script is first partitioned by
//! [`classify`](listpatch_primitives::classify), then issued against a
//! [`ListSurface`] by a [`BatchApplier`] inside one batch region.
//!
//! ```
//! use listpatch_primitives::Edit;
//! use listpatch_surface::{RecordingSurface, SurfaceCall, UpdateList};
//!
//! let mut surface = RecordingSurface::new();
//! surface.update_list(&[Edit::moved(5, 1), Edit::deletion(2)], None).unwrap();
//!
//! assert!(matches!(surface.calls()[1], SurfaceCall::Delete(_)));
//! assert!(matches!(surface.calls()[2], SurfaceCall::Move { .. }));
//! ```

/// Batch application and edit-script entry points.
pub mod apply;
/// Fault and error types.
pub mod error;
/// Applier configuration.
pub mod options;
/// Call-recording test double.
pub mod recording;
mod surface;

pub use apply::{BatchApplier, Completion, UpdateList, perform_batch};
pub use error::{ApplyError, ConfigError, SurfaceFault, UpdateKind};
pub use options::{MoveStrategy, UpdateOptions};
pub use recording::{RecordingSurface, SurfaceCall};
pub use surface::ListSurface;
