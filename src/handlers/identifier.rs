use std::collections::HashMap;

use axum::{extract::State, routing::get, Form, Router};
use maud::Markup;

use crate::{
    identifier::match_species,
    names,
    rejections::{AppError, ResultExt},
    views,
    views::identifier as identifier_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/identifier", get(identifier_form).post(identify))
}

async fn identifier_form(State(state): State<AppState>) -> Result<Markup, AppError> {
    let characteristics = state
        .db
        .characteristics_with_options()
        .await
        .reject("could not get characteristics")?;

    Ok(views::page(
        "Mushroom Identifier",
        identifier_views::questions(characteristics),
    ))
}

/// The identifier form posts one `char_<id>` field per characteristic;
/// blank values mean "not answered" and are ignored. Unparseable ids
/// are dropped the same way a stale form field would be.
fn parse_selection(form: &HashMap<String, String>) -> Vec<(i64, String)> {
    let mut selection: Vec<(i64, String)> = form
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .filter_map(|(key, value)| {
            let id = key
                .strip_prefix(names::CHARACTERISTIC_FIELD_PREFIX)?
                .parse::<i64>()
                .ok()?;
            Some((id, value.clone()))
        })
        .collect();
    selection.sort_by_key(|(id, _)| *id);
    selection
}

async fn identify(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Markup, AppError> {
    let selection = parse_selection(&form);

    let catalog = state
        .db
        .species_traits()
        .await
        .reject("could not get species traits")?;

    let matches = match_species(&selection, &catalog);

    let mut summaries = HashMap::new();
    for species in state
        .db
        .all_species()
        .await
        .reject("could not list species")?
    {
        summaries.insert(species.id, species);
    }

    let mut results = Vec::with_capacity(matches.len());
    for matched in matches {
        let Some(species) = summaries.get(&matched.species_id) else {
            continue;
        };
        let lookalikes = state
            .db
            .lookalikes_for(matched.species_id)
            .await
            .reject("could not get lookalikes")?;

        results.push(identifier_views::IdentifierResult {
            species: species.clone(),
            match_percentage: matched.match_percentage,
            lookalikes,
        });
    }

    tracing::info!(
        "identifier matched {} species for {} selected traits",
        results.len(),
        selection.len()
    );

    Ok(views::page(
        "Identification Results",
        identifier_views::results(results, selection.len()),
    ))
}
