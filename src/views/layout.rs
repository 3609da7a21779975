use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."brand" {
                        a href=(names::HOME_URL) {
                            strong { "Mycoguide" }
                        }
                    }
                }
                ul {
                    li { a href=(names::EDIBLE_URL) { "Edible" } }
                    li { a href=(names::POISONOUS_URL) { "Poisonous" } }
                    li { a href=(names::GALLERY_URL) { "Gallery" } }
                    li { a href=(names::IDENTIFIER_URL) { "Identifier" } }
                    li { a href=(names::QUIZ_HOME_URL) { "Quizzes" } }
                }
                ul {
                    li {
                        form action=(names::SEARCH_URL) method="get" {
                            input type="search" name="q" placeholder="Search mushrooms...";
                        }
                    }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())

            title { (format!("{title} - Mycoguide")) }
        }

        body."container" {
            (header())
            (main(body))
        }
    }
}
