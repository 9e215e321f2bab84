//! UI Components
//!
//! One component per page section.

pub mod cooking;
pub mod cta;
pub mod footer;
pub mod header;
pub mod hero;
pub mod ingredients;
pub mod instructions;
pub mod tips;

pub use cooking::Cooking;
pub use cta::CallToAction;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use ingredients::Ingredients;
pub use instructions::Instructions;
pub use tips::Tips;

/// Append the reveal hook once a region has been on screen
pub(crate) fn reveal_class(base: &str, seen: bool) -> String {
    if seen {
        format!("{} is-visible", base)
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class("py-20", false), "py-20");
        assert_eq!(reveal_class("py-20", true), "py-20 is-visible");
    }
}
