pub use secrecy::{ExposeSecret, SecretString};
pub use serde::Deserialize;
