pub mod root {
    pub static LOGIN: &str = "/login";
}

pub mod api {
    pub static SCOPE: &str = "/api";

    /// Relative to [`SCOPE`].
    pub static HEALTH_CHECK: &str = "/health_check";
}
