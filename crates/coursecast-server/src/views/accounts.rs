use maud::{html, Markup};

use super::layout::{form_error, page};
use crate::models::User;

pub fn register_page(viewer: Option<&User>, error: Option<&str>, name: &str, email: &str) -> Markup {
    page(
        "Register",
        viewer,
        html! {
            h1 { "Create an account" }
            (form_error(error))
            form method="post" action="/register" {
                label { "Name " input type="text" name="name" value=(name) required; }
                br;
                label { "Email " input type="email" name="email" value=(email) required; }
                br;
                label { "Password " input type="password" name="password" required; }
                br;
                button type="submit" { "Register" }
            }
            p { "Already registered? " a href="/login" { "Log in" } }
        },
    )
}

pub fn login_page(error: Option<&str>, email: &str) -> Markup {
    page(
        "Log in",
        None,
        html! {
            h1 { "Log in" }
            (form_error(error))
            form method="post" action="/login" {
                label { "Email " input type="email" name="email" value=(email) required; }
                br;
                label { "Password " input type="password" name="password" required; }
                br;
                button type="submit" { "Log in" }
            }
            p { "New here? " a href="/register" { "Create an account" } }
        },
    )
}
