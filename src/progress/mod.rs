//! Progress reporting for generation runs.
//!
//! The pipeline reports `(percent, message)` pairs at fixed milestones through an
//! injected [`ProgressReporter`]. [`ProgressTracker`] sits between the pipeline and
//! the reporter and keeps the reported percent monotonic.

pub mod event;
pub mod reporter;
pub mod tracker;

pub use event::{GenerationProgress, Milestone, DEGRADED_MESSAGE};
pub use reporter::{ChannelProgress, NoopProgress, ProgressReporter};
pub use tracker::ProgressTracker;
