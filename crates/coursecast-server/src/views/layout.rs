use maud::{html, Markup, DOCTYPE};

use crate::models::User;

fn header(viewer: Option<&User>) -> Markup {
    html! {
        header {
            nav {
                a href="/" { strong { "CourseCast" } }
                " | "
                @if let Some(user) = viewer {
                    a href="/dashboard" { "Dashboard" }
                    " | "
                    span { "Signed in as " (user.name) }
                    " | "
                    a href="/logout" { "Log out" }
                } @else {
                    a href="/login" { "Log in" }
                    " | "
                    a href="/register" { "Register" }
                }
            }
        }
    }
}

pub fn page(title: &str, viewer: Option<&User>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - CourseCast" }
            }
            body {
                (header(viewer))
                main { (body) }
            }
        }
    }
}

/// Inline error banner for re-rendered forms
pub fn form_error(message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            p role="alert" class="error" { (message) }
        }
    }
}
