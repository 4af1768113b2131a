use maud::{html, Markup, PreEscaped};

use super::layout::page;
use crate::features::courses::DashboardEntry;
use crate::models::{Course, Quiz, User};

/// Posts the selected option as JSON and shows the score
const QUIZ_SCRIPT: &str = r#"
document.getElementById('quiz-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const form = event.target;
  const selected = form.querySelector('input[name="selected_index"]:checked');
  if (!selected) { return; }
  const response = await fetch('/api/submit_quiz', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({
      course_id: Number(form.dataset.courseId),
      selected_index: Number(selected.value),
    }),
  });
  const result = document.getElementById('quiz-result');
  if (!response.ok) { result.textContent = 'Could not submit answer.'; return; }
  const data = await response.json();
  result.textContent = (data.correct ? 'Correct! ' : 'Not quite. ') + 'Progress: ' + data.progress + '%';
});
"#;

pub fn index_page(viewer: Option<&User>, courses: &[Course]) -> Markup {
    page(
        "Courses",
        viewer,
        html! {
            h1 { "Courses" }
            @if let Some(user) = viewer {
                p { "Welcome back, " (user.name) "." }
            }
            @if courses.is_empty() {
                p { "No courses yet." }
            } @else {
                ul {
                    @for course in courses {
                        li {
                            a href={ "/course/" (course.id) } { (course.title) }
                            " - " (course.description)
                        }
                    }
                }
            }
        },
    )
}

pub fn dashboard_page(user: &User, entries: &[DashboardEntry]) -> Markup {
    page(
        "Dashboard",
        Some(user),
        html! {
            h1 { "Your courses" }
            table {
                thead { tr { th { "Course" } th { "Progress" } } }
                tbody {
                    @for entry in entries {
                        tr {
                            td { a href={ "/course/" (entry.course_id) } { (entry.title) } }
                            td {
                                @match entry.progress_percent {
                                    Some(percent) => { (percent) "%" },
                                    None => "Not started",
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn course_page(user: &User, course: &Course, quiz: Option<&Quiz>) -> Markup {
    page(
        &course.title,
        Some(user),
        html! {
            h1 { (course.title) }
            p { (course.description) }
            video controls preload="metadata" width="640" src={ "/video/" (course.video_filename) } {
                "Your browser does not support embedded video."
            }
            @if let Some(quiz) = quiz {
                section {
                    h2 { "Quiz" }
                    form id="quiz-form" data-course-id=(course.id) {
                        p { (quiz.question) }
                        @for (index, option) in quiz.options.iter().enumerate() {
                            label {
                                input type="radio" name="selected_index" value=(index);
                                " " (option)
                            }
                            br;
                        }
                        button type="submit" { "Submit answer" }
                    }
                    p id="quiz-result" {}
                    script { (PreEscaped(QUIZ_SCRIPT)) }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn user() -> User {
        User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: String::new(),
            created_at: NaiveDateTime::default(),
        }
    }

    fn course() -> Course {
        Course {
            id: 3,
            title: "Intro to Flask".to_string(),
            description: "Basics".to_string(),
            video_filename: "sample.mp4".to_string(),
        }
    }

    #[test]
    fn test_course_page_links_video_and_quiz() {
        let quiz = Quiz {
            id: 1,
            course_id: 3,
            question: "What is Flask?".to_string(),
            options: vec!["A microframework".to_string(), "A database".to_string()],
            answer_index: 0,
        };
        let html = course_page(&user(), &course(), Some(&quiz)).into_string();
        assert!(html.contains(r#"src="/video/sample.mp4""#));
        assert!(html.contains("What is Flask?"));
        assert!(html.contains(r#"data-course-id="3""#));
        assert!(html.contains("/api/submit_quiz"));
    }

    #[test]
    fn test_course_page_without_quiz() {
        let html = course_page(&user(), &course(), None).into_string();
        assert!(!html.contains("quiz-form"));
    }

    #[test]
    fn test_dashboard_progress_cells() {
        let entries = vec![
            DashboardEntry {
                course_id: 1,
                title: "Done".to_string(),
                description: String::new(),
                progress_percent: Some(100),
            },
            DashboardEntry {
                course_id: 2,
                title: "Fresh".to_string(),
                description: String::new(),
                progress_percent: None,
            },
        ];
        let html = dashboard_page(&user(), &entries).into_string();
        assert!(html.contains("100%"));
        assert!(html.contains("Not started"));
    }
}
