use crate::imports::*;
use crate::{FieldDescriptor, FieldValues, Icon};

pub static LOGIN_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "username",
        placeholder: "Username",
        masked: false,
        required: true,
        message: "Please input your Username!",
        icon: Icon::User,
    },
    FieldDescriptor {
        name: "email",
        placeholder: "email",
        masked: false,
        required: true,
        message: "Please input your email!",
        icon: Icon::User,
    },
    FieldDescriptor {
        name: "phone number",
        placeholder: "phone number",
        masked: false,
        required: true,
        message: "Please input your phone number!",
        icon: Icon::User,
    },
    FieldDescriptor {
        name: "password",
        placeholder: "input password",
        masked: true,
        required: true,
        message: "Please input your Password!",
        icon: Icon::Lock,
    },
];

/// Values posted by the login form. Every field is optional on the wire,
/// absence is reported by validation rather than by deserialization.
#[derive(Deserialize, Default, Debug)]
pub struct LoginSubmission {
    pub username: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "phone number")]
    pub phone_number: Option<String>,
    pub password: Option<SecretString>,
}

impl FieldValues for LoginSubmission {
    fn value(&self, name: &str) -> Option<&str> {
        match name {
            "username" => self.username.as_deref(),
            "email" => self.email.as_deref(),
            "phone number" => self.phone_number.as_deref(),
            "password" => self.password.as_ref().map(|p| p.expose_secret().as_str()),
            _ => None,
        }
    }
}
