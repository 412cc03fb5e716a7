//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns submission orchestration and delegates rendering details
//! to `components`.

pub mod planner;
