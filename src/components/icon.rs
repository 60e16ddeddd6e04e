use interfacing::Icon;
use maud::{html, Markup};

fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::User => "\u{1F464}",
        Icon::Lock => "\u{1F512}",
    }
}

/// Decorative prefix glyph, hidden from assistive technology.
pub fn icon(icon: Icon) -> Markup {
    html! {
        span class={ "anticon anticon-" (icon.name()) " site-form-item-icon" } aria-hidden="true" {
            (glyph(icon))
        }
    }
}
