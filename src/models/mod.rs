pub mod course;
pub mod landing;
pub mod session;

pub use course::{Course, CourseTeaser};
pub use landing::{Landing, SocialLink};
pub use session::{Resource, ResourceIcon, ResourceKind, Session};
