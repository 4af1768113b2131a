pub mod dashboard;
pub mod get;
pub mod list;

pub use dashboard::{DashboardEntry, DashboardError, DashboardQuery};
pub use get::{GetCourseError, GetCourseQuery};
pub use list::{ListCoursesError, ListCoursesQuery};
