//! Property-driven UI components.
//!
//! - [`TextInput`]: a multi-line text field with optional debouncing of value
//!   changes until blur.
//! - [`NavLink`]: a navigation link that counts clicks unless disabled.
//!
//! Both components are driven by an owner: the owner supplies properties and
//! receives [`PropUpdate`](propkit_types::PropUpdate) notifications through an
//! optional [`PropsListener`](propkit_types::PropsListener). Properties that a
//! component does not own are forwarded untouched to the rendered element.

pub mod component;
pub mod link;
pub mod nav_link;
pub mod props;
pub mod text_input;

pub use component::Component;
pub use link::{ClickEvent, Link, Navigation, is_absolute_url};
pub use nav_link::{NavLink, NavLinkProps};
pub use props::PropsError;
pub use text_input::{TextInput, TextInputProps};
