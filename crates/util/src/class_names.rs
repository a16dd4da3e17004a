//! Class-name composition.
//!
//! Builds a space separated class list from unconditional, conditional and
//! optional parts, keeping the order in which they were added.

/// Builder for a space separated class attribute.
///
/// # Example
/// ```rust
/// use propkit_util::ClassNames;
///
/// let classes = ClassNames::new()
///     .add_opt(Some("custom"))
///     .add_if(true, "is-invalid")
///     .add_if(false, "is-valid")
///     .add("form-control")
///     .build();
/// assert_eq!(classes, "custom is-invalid form-control");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames {
    classes: Vec<String>,
}

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class. Blank input is ignored; surrounding whitespace is trimmed.
    pub fn add(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref().trim();
        if !class.is_empty() {
            self.classes.push(class.to_string());
        }
        self
    }

    /// Append a class only when `condition` holds.
    pub fn add_if(self, condition: bool, class: impl AsRef<str>) -> Self {
        if condition { self.add(class) } else { self }
    }

    pub fn add_opt(self, class: Option<impl AsRef<str>>) -> Self {
        match class {
            Some(class) => self.add(class),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn build(&self) -> String {
        self.classes.join(" ")
    }
}
