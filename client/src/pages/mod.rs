//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state (queries, selections, current page) and
//! delegates rendering details to `components`.

pub mod blog_list;
pub mod blog_post;
pub mod dashboard;
pub mod home;
pub mod marketplace;
