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
// Tests unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Formation and focus coordination for an interactive 3D holiday scene.
//!
//! Decorative lockets either float scattered or gather into a tree, and one
//! of them at a time can take exclusive focus. This crate owns that state
//! and everything derived from it; meshes, GPU buffers, post-processing and
//! the orbit camera live in the renderer and read what is published here.
//!
//! # Key entry points
//!
//! - [`engine::Coordinator`] - owns the state and produces a
//!   [`engine::FrameOutput`] every frame
//! - [`state::StateStore`] - the single source of truth for formation and
//!   focus
//! - [`animation::damp()`] - frame-rate independent exponential damping
//! - [`targets::resolve_targets`] and [`gate::InteractionFlags`] - pure
//!   per-frame derivations from the state
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame flow
//!
//! Input becomes [`engine::Command`]s via [`input::InputProcessor`]. Each
//! frame the coordinator applies queued commands, snapshots the state,
//! resolves light and formation targets, eases the damped parameters toward
//! them by the elapsed time and evaluates the interaction gate.

pub mod animation;
pub mod engine;
pub mod error;
pub mod gate;
pub mod input;
pub mod options;
pub mod scene;
pub mod state;
pub mod targets;
pub mod util;

pub use engine::{Command, Coordinator, FrameOutput};
pub use error::ArixError;
pub use state::{CoordinatorState, FormationMode, LocketId};
