//! Per-page presentation state and view helpers.

pub mod card;
pub mod date;
pub mod expansion;
pub mod sections;
pub mod theme;

pub use card::{CardVariant, CourseCard};
pub use expansion::SessionExpansion;
pub use sections::{NavDot, SectionTracker};
pub use theme::Theme;
