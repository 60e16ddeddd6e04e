/// Decorative glyph shown in front of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    User,
    Lock,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Lock => "lock",
        }
    }
}

/// Declarative description of a single form input.
///
/// Descriptors are static data: a form is an ordered slice of them, rendered
/// top to bottom and validated in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Value of the input's `name` attribute, also the key in a submission.
    pub name: &'static str,
    pub placeholder: &'static str,
    /// Masked inputs are rendered as `type="password"` and never re-populated.
    pub masked: bool,
    pub required: bool,
    /// Shown inline when a required field is left empty.
    pub message: &'static str,
    pub icon: Icon,
}

impl FieldDescriptor {
    pub fn input_type(&self) -> &'static str {
        if self.masked {
            "password"
        } else {
            "text"
        }
    }
}

/// Source of submitted values, looked up by field name.
pub trait FieldValues {
    fn value(&self, name: &str) -> Option<&str>;

    /// Missing and empty values are both blank; whitespace is a value.
    fn is_blank(&self, name: &str) -> bool {
        self.value(name).map_or(true, str::is_empty)
    }
}

impl<T> FieldValues for &T
where
    T: FieldValues + ?Sized,
{
    fn value(&self, name: &str) -> Option<&str> {
        (**self).value(name)
    }
}

impl FieldValues for [(&str, &str)] {
    fn value(&self, name: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }
}
