//! Shader input plumbing between the runtime's introspection and the
//! editor's control panel.
//!
//! [`InputValue`] is the runtime's wire shape for one input. [`display_props`]
//! adapts a value into what its control widget binds, and [`apply_update`]
//! writes an edited value back onto it.

pub mod props;
pub mod update;
pub mod value;

pub use props::{display_props, panel_props, InputProps};
pub use update::{apply_update, UpdateError};
pub use value::{InputValue, InputVariant};
