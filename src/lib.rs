//! Editor-side toolkit for tweak_shader projects.
//!
//! Pragma parsing, GPU ownership, and preview rendering all live in the
//! shader runtime and the editor front end; this crate covers the seams
//! between them:
//! - `inputs` - introspected input values and their control-panel props
//! - `template` - the starter shader new projects are seeded with
//! - `theme` - the syntax highlight theme the code editor loads
//!
//! Everything here is plain data and pure conversions. Nothing touches a GPU.

pub mod inputs;
pub mod template;
pub mod theme;
