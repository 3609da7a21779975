use maud::{html, Markup};

use crate::{
    db::models::{CharacteristicModel, LookalikeModel, SpeciesSummary},
    names,
    views::catalog::{danger_label, edibility_label},
};

pub fn questions(characteristics: Vec<CharacteristicModel>) -> Markup {
    html! {
        h1 { "Mushroom Identifier" }
        p {
            "Answer what you can see. Every answered question narrows the list; "
            "leave a question open if you are not sure."
        }
        @if characteristics.is_empty() {
            p { em { "No identification questions are configured yet." } }
        } @else {
            form action=(names::IDENTIFIER_URL) method="post" {
                @for characteristic in &characteristics {
                    label {
                        (characteristic.question)
                        @if characteristic.is_important {
                            " " span."important" { "(key trait)" }
                        }
                        select name=(format!("{}{}", names::CHARACTERISTIC_FIELD_PREFIX, characteristic.id)) {
                            option value="" selected { "— not sure —" }
                            @for option in &characteristic.options {
                                option value=(option.value) { (option.label) }
                            }
                        }
                    }
                }
                button type="submit" { "Identify" }
            }
        }
    }
}

pub struct IdentifierResult {
    pub species: SpeciesSummary,
    pub match_percentage: i64,
    pub lookalikes: Vec<LookalikeModel>,
}

pub fn results(results: Vec<IdentifierResult>, answered_count: usize) -> Markup {
    html! {
        h1 { "Identification Results" }
        @if answered_count == 0 {
            p { em { "No traits selected, so the whole catalog matches. Answer a few questions to narrow it down." } }
        } @else {
            p { "Species matching all " (answered_count) " selected trait(s):" }
        }

        @if results.is_empty() {
            article {
                p { "No species in the catalog matches this combination of traits." }
                p {
                    "Either a trait was misjudged, or the mushroom is not in the catalog. "
                    "When an identification is uncertain, never eat the find."
                }
            }
        } @else {
            @for result in &results {
                article."match" {
                    header {
                        a href=(names::species_url(result.species.id)) {
                            strong { (result.species.name) }
                        }
                        " "
                        em { (result.species.latin_name) }
                        span."match-percentage" { (result.match_percentage) "% match" }
                    }
                    p { small { (edibility_label(&result.species.edibility)) } }
                    @if !result.lookalikes.is_empty() {
                        p."warning-text" {
                            "Can be confused with: "
                            @for (i, lookalike) in result.lookalikes.iter().enumerate() {
                                @if i > 0 { ", " }
                                a href=(names::species_url(lookalike.lookalike_id)) { (lookalike.name) }
                                " (" (danger_label(&lookalike.danger_level)) ")"
                            }
                        }
                    }
                }
            }
        }

        a role="button" href=(names::IDENTIFIER_URL) class="outline" { "Start over" }
    }
}
