use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    rejections::{AppError, ResultExt},
    views,
    views::catalog as catalog_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/edible", get(edible))
        .route("/poisonous", get(poisonous))
        .route("/gallery", get(gallery))
        .route("/mushroom/{id}", get(species_detail))
        .route("/search", get(search))
        .route("/kingdom", get(kingdom))
}

async fn home() -> Markup {
    views::page("Home", catalog_views::home())
}

async fn kingdom() -> Markup {
    views::page("The Fungus Kingdom", catalog_views::kingdom())
}

async fn edible(State(state): State<AppState>) -> Result<Markup, AppError> {
    let species = state
        .db
        .edible_species()
        .await
        .reject("could not list edible species")?;

    // Grouped by morphology like the field guides do
    let tubular: Vec<_> = species
        .iter()
        .filter(|s| s.species_type == "tubular")
        .cloned()
        .collect();
    let lamellar: Vec<_> = species
        .iter()
        .filter(|s| s.species_type == "lamellar")
        .cloned()
        .collect();
    let other: Vec<_> = species
        .iter()
        .filter(|s| s.species_type != "tubular" && s.species_type != "lamellar")
        .cloned()
        .collect();

    Ok(views::page(
        "Edible Mushrooms",
        catalog_views::edible(tubular, lamellar, other),
    ))
}

async fn poisonous(State(state): State<AppState>) -> Result<Markup, AppError> {
    let species = state
        .db
        .poisonous_species()
        .await
        .reject("could not list poisonous species")?;

    Ok(views::page(
        "Poisonous Mushrooms",
        catalog_views::poisonous(species),
    ))
}

async fn gallery(State(state): State<AppState>) -> Result<Markup, AppError> {
    let species = state
        .db
        .all_species()
        .await
        .reject("could not list species")?;

    Ok(views::page("Gallery", catalog_views::gallery(species)))
}

async fn species_detail(
    State(state): State<AppState>,
    Path(species_id): Path<i64>,
) -> Result<Markup, AppError> {
    let species = state
        .db
        .get_species(species_id)
        .await
        .reject("could not get species")?
        .ok_or(AppError::NotFound("this mushroom"))?;

    let lookalikes = state
        .db
        .lookalikes_for(species_id)
        .await
        .reject("could not get lookalikes")?;

    let traits = state
        .db
        .species_trait_labels(species_id)
        .await
        .reject("could not get species traits")?;

    let similar = state
        .db
        .similar_species(&species.species_type, &species.edibility, species_id, 4)
        .await
        .reject("could not get similar species")?;

    let title = species.name.clone();
    Ok(views::page(
        &title,
        catalog_views::species_detail(catalog_views::SpeciesDetailData {
            species,
            lookalikes,
            traits,
            similar,
        }),
    ))
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Markup, AppError> {
    let query_text = query.q.trim();

    let species = if query_text.is_empty() {
        Vec::new()
    } else {
        state
            .db
            .search_species(query_text)
            .await
            .reject("could not search species")?
    };

    Ok(views::page(
        "Search",
        catalog_views::search_results(query_text, species),
    ))
}
