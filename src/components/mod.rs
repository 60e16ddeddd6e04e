mod icon;
mod login_form;

pub use icon::icon;
pub use login_form::{login_form, FormState};
