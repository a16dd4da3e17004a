//! Helpers shared by propkit components: class-name composition, attribute
//! filtering, clocks and HTML rendering of element descriptions.

pub mod attributes;
pub mod class_names;
pub mod clock;
pub mod html;

pub use attributes::{omit, partition};
pub use class_names::ClassNames;
pub use clock::{Clock, ManualClock, SystemClock, next_timestamp};
pub use html::to_html;
