//! Pages
//!
//! The two top-level branches.

pub mod desktop_only;
pub mod recipe;

pub use desktop_only::DesktopOnlyNotice;
pub use recipe::RecipePage;
