//! State Management
//!
//! The page view signal shared by every component.

pub mod page;

pub use page::{provide_page_state, use_page_state, PageState};
