pub mod get_for_course;

pub use get_for_course::{GetQuizForCourseError, GetQuizForCourseQuery};
