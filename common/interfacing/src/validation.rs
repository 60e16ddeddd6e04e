use crate::{FieldDescriptor, FieldValues};

/// Required fields that were left empty, in form order.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{} required field(s) left empty", .failed.len())]
pub struct ValidationErrors {
    failed: Vec<&'static FieldDescriptor>,
}

impl ValidationErrors {
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> + '_ {
        self.failed.iter().copied()
    }

    pub fn messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields().map(|f| f.message)
    }

    /// Message for `name` when that field failed.
    pub fn message_for(&self, name: &str) -> Option<&'static str> {
        self.fields().find(|f| f.name == name).map(|f| f.message)
    }

    pub fn len(&self) -> usize {
        self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failed.is_empty()
    }
}

pub fn validate<V>(fields: &'static [FieldDescriptor], values: &V) -> Result<(), ValidationErrors>
where
    V: FieldValues + ?Sized,
{
    let failed: Vec<_> = fields
        .iter()
        .filter(|field| field.required && values.is_blank(field.name))
        .collect();

    if failed.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { failed })
    }
}
