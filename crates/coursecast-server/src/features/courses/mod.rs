//! Course catalogue, dashboard, and course pages

pub mod queries;
pub mod routes;

pub use queries::{DashboardEntry, GetCourseError, GetCourseQuery, ListCoursesQuery};
pub use routes::courses_routes;
