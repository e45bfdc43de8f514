// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Page-curl animation core for an interactive 3D photo book.
//!
//! Folio turns a flat, rigid page mesh into a curling page by driving a
//! chain of joints along the page's long axis, and paces multi-page jumps so
//! every page in between turns on its own.
//!
//! # Key entry points
//!
//! - [`book::PhotoBook`] - pages, rigs, sequencer and layout advanced once
//!   per frame
//! - [`animation::PageIndexSequencer`] - steps the current page toward the
//!   requested one
//! - [`animation::PageCurlAnimator`] - per-page joint targets and damping
//! - [`skeleton`] - joint chains, skin weights and CPU skinning
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything is single-threaded and frame-driven. The host calls
//! [`book::PhotoBook::update`] with the frame time; the sequencer steps
//! first, each page derives its opened flag from the new current page, and
//! the curl animator damps its chain toward the resulting pose. Rendering
//! is left to the host engine, which reads back joint rotations (or
//! skinning matrices) and the book transform.

pub mod animation;
pub mod book;
pub mod error;
pub mod options;
pub mod skeleton;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use error::FolioError;
