mod imports;

mod field;
mod login_form;
mod validation;

pub use field::{FieldDescriptor, FieldValues, Icon};
pub use login_form::{LoginSubmission, LOGIN_FIELDS};
pub use validation::{validate, ValidationErrors};
