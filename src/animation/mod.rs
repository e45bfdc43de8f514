//! Animation system for page turns.
//!
//! - [`sequencer`] turns a requested page into a paced, one-page-at-a-time
//!   walk of the current page index.
//! - [`curl`] shapes and damps each page's joint chain every frame.
//! - [`damping`] and [`easing`] are the pure building blocks both use.

pub mod curl;
pub mod damping;
pub mod easing;
pub mod sequencer;

pub use curl::{CurlInput, CurlPose, JointTarget, PageCurlAnimator};
pub use easing::EasingFunction;
pub use sequencer::{PageIndexSequencer, SequencerState};
