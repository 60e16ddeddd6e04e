mod imports;

mod health_check;
mod login;
pub use health_check::*;
pub use login::*;
