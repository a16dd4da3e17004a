//! Component lifecycle shared by all propkit components.
//!
//! A component is driven from two directions. The owner pushes properties
//! down through [`Component::receive_props`], and the host framework asks for
//! a description of the element through [`Component::render`]. User
//! interaction arrives through inherent handler methods (`on_change`,
//! `click`, ...), which report back to the owner via its
//! [`PropsListener`](propkit_types::PropsListener).

use propkit_types::Element;

/// A property-driven component.
///
/// # Lifecycle
///
/// 1. **Creation**: the component is built from its initial properties.
/// 2. **Interaction**: handlers update local state and notify the owner.
/// 3. **Property updates**: `receive_props` replaces the properties. The
///    owner is the source of truth, so local state is re-seeded from them.
/// 4. **Rendering**: `render` is side-effect free and may be called at any time.
///
/// # Example
///
/// ```rust
/// use propkit_components::{Component, TextInput, TextInputProps};
///
/// let mut input = TextInput::new(TextInputProps::new().with_value("draft"));
/// input.receive_props(TextInputProps::new().with_value("reset"));
/// assert_eq!(input.render().value.as_deref(), Some("reset"));
/// ```
pub trait Component {
    /// Typed property set owned by the component.
    type Props;

    /// Properties most recently supplied by the owner.
    fn props(&self) -> &Self::Props;

    /// Replace the properties with a new set from the owner.
    fn receive_props(&mut self, props: Self::Props);

    /// Describe the element to display for the current state.
    fn render(&self) -> Element;
}
