//! The interactive identifier's matching engine.
//!
//! Works over prefetched trait assignments so it can be exercised against
//! fixture catalogs without a database.

use std::collections::HashMap;

/// Recorded trait assignments for one species, keyed by characteristic id.
/// At most one option value per characteristic.
#[derive(Debug, Clone)]
pub struct SpeciesTraits {
    pub species_id: i64,
    pub assignments: HashMap<i64, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesMatch {
    pub species_id: i64,
    pub match_percentage: i64,
}

/// Filters the catalog to species matching every selected
/// (characteristic, value) pair and ranks them by match percentage.
///
/// An empty selection vacuously matches the whole catalog at 100%.
/// A species missing an assignment for a constrained characteristic is
/// excluded by that constraint, as is a selection value no species
/// carries. The result keeps catalog order among equal percentages.
///
/// The hard filter and the score currently share the same full-match
/// test, so every surviving species scores 100. The score is still
/// derived from the matched count so that a relaxed filter would surface
/// partial percentages.
pub fn match_species(selection: &[(i64, String)], catalog: &[SpeciesTraits]) -> Vec<SpeciesMatch> {
    if selection.is_empty() {
        return catalog
            .iter()
            .map(|species| SpeciesMatch {
                species_id: species.species_id,
                match_percentage: 100,
            })
            .collect();
    }

    let total = selection.len();

    let mut matches: Vec<SpeciesMatch> = catalog
        .iter()
        .filter_map(|species| {
            let matched = selection
                .iter()
                .filter(|(characteristic_id, value)| {
                    species
                        .assignments
                        .get(characteristic_id)
                        .is_some_and(|assigned| assigned == value)
                })
                .count();

            if matched < total {
                return None;
            }

            Some(SpeciesMatch {
                species_id: species.species_id,
                match_percentage: (matched * 100 / total) as i64,
            })
        })
        .collect();

    // stable: ties keep catalog order
    matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

    matches
}
