use maud::{html, Markup};

use crate::{
    db::models::{LookalikeModel, SpeciesModel, SpeciesSummary, SpeciesTraitLabel},
    names,
};

pub fn edibility_label(edibility: &str) -> &'static str {
    match edibility {
        "edible" => "Edible",
        "conditionally_edible" => "Edible after preparation",
        "inedible" => "Inedible",
        "poisonous" => "Poisonous",
        "deadly" => "Deadly poisonous",
        _ => "Unknown",
    }
}

pub fn danger_label(danger_level: &str) -> &'static str {
    match danger_level {
        "deadly" => "Deadly",
        "high" => "High danger",
        "medium" => "Moderate danger",
        "low" => "Low danger",
        _ => "Unknown danger",
    }
}

fn species_card(species: &SpeciesSummary) -> Markup {
    html! {
        article."species-card" {
            header {
                a href=(names::species_url(species.id)) {
                    strong { (species.name) }
                }
            }
            p."latin" { em { (species.latin_name) } }
            p { small { (edibility_label(&species.edibility)) } }
        }
    }
}

fn species_grid(species: &[SpeciesSummary]) -> Markup {
    html! {
        div."species-grid" {
            @for s in species {
                (species_card(s))
            }
        }
    }
}

pub fn home() -> Markup {
    html! {
        section."hero" {
            h1 { "Know your mushrooms" }
            p {
                "A field companion for mushroom pickers: browse the catalog, "
                "identify a find by its visible traits, and test yourself with quizzes."
            }
            div."hero-links" {
                a role="button" href=(names::IDENTIFIER_URL) { "Identify a mushroom" }
                a role="button" href=(names::QUIZ_HOME_URL) class="outline" { "Take a quiz" }
            }
        }
        section {
            h2 { "Explore" }
            div."explore-grid" {
                article {
                    h3 { a href=(names::EDIBLE_URL) { "Edible mushrooms" } }
                    p { "Species safe for the table, grouped by how they carry their spores." }
                }
                article {
                    h3 { a href=(names::POISONOUS_URL) { "Poisonous mushrooms" } }
                    p { "The species every picker must be able to rule out." }
                }
                article {
                    h3 { a href=(names::GALLERY_URL) { "Gallery" } }
                    p { "The whole catalog at a glance." }
                }
                article {
                    h3 { a href=(names::KINGDOM_URL) { "The fungus kingdom" } }
                    p { "What mushrooms actually are, and how they live." }
                }
            }
        }
    }
}

pub fn kingdom() -> Markup {
    html! {
        h1 { "The Fungus Kingdom" }
        article {
            p {
                "Fungi are neither plants nor animals. The mushroom you pick is only "
                "the fruiting body of a much larger organism: a web of fine threads, "
                "the mycelium, that lives in soil or wood."
            }
            p {
                "Many forest mushrooms live in partnership with trees, trading minerals "
                "and water for sugars. That is why certain species appear only under "
                "certain trees, and why habitat is such a strong identification clue."
            }
            p {
                "Others are decomposers that break down dead wood and litter. Without "
                "them forests would drown in their own debris."
            }
        }
        article {
            h2 { "Reading a mushroom" }
            p {
                "Identification rests on visible traits: the shape of the cap, whether "
                "the underside carries gills, tubes or spines, the color of the flesh, "
                "the presence of a ring or a sack at the base of the stem."
            }
            p {
                "No single trait is proof. Pickers combine several, and when in doubt, "
                "leave the mushroom standing."
            }
            a role="button" href=(names::IDENTIFIER_URL) { "Try the identifier" }
        }
    }
}

pub fn edible(
    tubular: Vec<SpeciesSummary>,
    lamellar: Vec<SpeciesSummary>,
    other: Vec<SpeciesSummary>,
) -> Markup {
    html! {
        h1 { "Edible Mushrooms" }
        p {
            "Even edible species can be confused with dangerous lookalikes. "
            "Open a species page and read its lookalike warnings before picking."
        }
        @if !tubular.is_empty() {
            section {
                h2 { "Tubular (boletes)" }
                (species_grid(&tubular))
            }
        }
        @if !lamellar.is_empty() {
            section {
                h2 { "Lamellar (gilled)" }
                (species_grid(&lamellar))
            }
        }
        @if !other.is_empty() {
            section {
                h2 { "Other" }
                (species_grid(&other))
            }
        }
        @if tubular.is_empty() && lamellar.is_empty() && other.is_empty() {
            p { em { "No edible species in the catalog yet." } }
        }
    }
}

pub fn poisonous(species: Vec<SpeciesSummary>) -> Markup {
    html! {
        h1 { "Poisonous Mushrooms" }
        p."warning-text" {
            "Learn these species first. A single deadly mushroom in the basket "
            "can spoil, or end, the whole meal."
        }
        @if species.is_empty() {
            p { em { "No poisonous species in the catalog yet." } }
        } @else {
            (species_grid(&species))
        }
    }
}

pub fn gallery(species: Vec<SpeciesSummary>) -> Markup {
    html! {
        h1 { "Gallery" }
        @if species.is_empty() {
            p { em { "The catalog is empty." } }
        } @else {
            (species_grid(&species))
        }
    }
}

pub struct SpeciesDetailData {
    pub species: SpeciesModel,
    pub lookalikes: Vec<LookalikeModel>,
    pub traits: Vec<SpeciesTraitLabel>,
    pub similar: Vec<SpeciesSummary>,
}

fn detail_row(label: &str, value: &str) -> Markup {
    html! {
        @if !value.is_empty() {
            tr {
                th { (label) }
                td { (value) }
            }
        }
    }
}

pub fn species_detail(data: SpeciesDetailData) -> Markup {
    let species = &data.species;
    html! {
        hgroup {
            h1 { (species.name) }
            p { em { (species.latin_name) } }
        }

        p."edibility-badge" { (edibility_label(&species.edibility)) }

        @if !species.warning.is_empty() {
            article."warning-box" {
                strong { "Warning: " }
                (species.warning)
            }
        }

        @if !species.description.is_empty() {
            p { (species.description) }
        }

        table {
            tbody {
                (detail_row("Habitat", &species.habitat))
                (detail_row("Season", &species.season))
                (detail_row("Distribution", &species.distribution))
                (detail_row("Key features", &species.key_features))
                (detail_row("In the kitchen", &species.cooking_tips))
            }
        }

        @if !data.traits.is_empty() {
            section {
                h2 { "Traits" }
                table {
                    tbody {
                        @for t in &data.traits {
                            tr {
                                th { (t.characteristic) }
                                td { (t.label) }
                            }
                        }
                    }
                }
            }
        }

        @if !data.lookalikes.is_empty() {
            section {
                h2 { "Dangerous lookalikes" }
                @for lookalike in &data.lookalikes {
                    article."lookalike" {
                        header {
                            a href=(names::species_url(lookalike.lookalike_id)) {
                                strong { (lookalike.name) }
                            }
                            " "
                            em { (lookalike.latin_name) }
                            " — "
                            (danger_label(&lookalike.danger_level))
                        }
                        @if !lookalike.differences.is_empty() {
                            p { "How to tell apart: " (lookalike.differences) }
                        }
                        @if !lookalike.visual_differences.is_empty() {
                            p { "Visual differences: " (lookalike.visual_differences) }
                        }
                        @if !lookalike.warning.is_empty() {
                            p."warning-text" { (lookalike.warning) }
                        }
                    }
                }
            }
        }

        @if !data.similar.is_empty() {
            section {
                h2 { "Similar species" }
                (species_grid(&data.similar))
            }
        }
    }
}

pub fn search_results(query: &str, species: Vec<SpeciesSummary>) -> Markup {
    html! {
        h1 { "Search" }
        form action=(names::SEARCH_URL) method="get" {
            input type="search" name="q" value=(query) placeholder="Name, latin name, habitat...";
            button type="submit" { "Search" }
        }
        @if query.is_empty() {
            p { em { "Type a name, latin name, or habitat to search the catalog." } }
        } @else if species.is_empty() {
            p { em { "Nothing found for '" (query) "'." } }
        } @else {
            p { (species.len()) " result(s) for '" (query) "'" }
            (species_grid(&species))
        }
    }
}
