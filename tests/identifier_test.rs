use mycoguide::identifier::{match_species, SpeciesTraits};

fn species(species_id: i64, assignments: &[(i64, &str)]) -> SpeciesTraits {
    SpeciesTraits {
        species_id,
        assignments: assignments
            .iter()
            .map(|(id, value)| (*id, value.to_string()))
            .collect(),
    }
}

fn selection(pairs: &[(i64, &str)]) -> Vec<(i64, String)> {
    pairs.iter().map(|(id, value)| (*id, value.to_string())).collect()
}

/// Three species over two characteristics: underside (1) and ring (2).
fn fixture_catalog() -> Vec<SpeciesTraits> {
    vec![
        species(10, &[(1, "tubes"), (2, "no")]),
        species(20, &[(1, "gills"), (2, "no")]),
        species(30, &[(1, "gills"), (2, "yes")]),
    ]
}

#[test]
fn empty_selection_matches_the_whole_catalog() {
    let catalog = fixture_catalog();
    let matches = match_species(&[], &catalog);

    assert_eq!(matches.len(), 3);
    assert!(matches.iter().all(|m| m.match_percentage == 100));
    // Catalog order is preserved
    let ids: Vec<i64> = matches.iter().map(|m| m.species_id).collect();
    assert_eq!(ids, vec![10, 20, 30]);
}

#[test]
fn single_trait_narrows_to_matching_species() {
    let catalog = fixture_catalog();
    let matches = match_species(&selection(&[(1, "gills")]), &catalog);

    let ids: Vec<i64> = matches.iter().map(|m| m.species_id).collect();
    assert_eq!(ids, vec![20, 30]);
    assert!(matches.iter().all(|m| m.match_percentage == 100));
}

#[test]
fn traits_combine_as_an_and_filter() {
    let catalog = fixture_catalog();
    let matches = match_species(&selection(&[(1, "gills"), (2, "yes")]), &catalog);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].species_id, 30);
    assert_eq!(matches[0].match_percentage, 100);
}

#[test]
fn species_without_the_assignment_is_excluded() {
    // Species 40 has no recorded ring trait at all
    let mut catalog = fixture_catalog();
    catalog.push(species(40, &[(1, "gills")]));

    let matches = match_species(&selection(&[(1, "gills"), (2, "no")]), &catalog);

    let ids: Vec<i64> = matches.iter().map(|m| m.species_id).collect();
    assert_eq!(ids, vec![20]);
}

#[test]
fn unknown_trait_value_matches_nothing() {
    let catalog = fixture_catalog();

    assert!(match_species(&selection(&[(1, "spines")]), &catalog).is_empty());
    assert!(match_species(&selection(&[(99, "tubes")]), &catalog).is_empty());
}

#[test]
fn empty_catalog_yields_no_matches() {
    assert!(match_species(&[], &[]).is_empty());
    assert!(match_species(&selection(&[(1, "tubes")]), &[]).is_empty());
}

#[test]
fn percentages_are_non_increasing() {
    let catalog = fixture_catalog();
    let matches = match_species(&selection(&[(2, "no")]), &catalog);

    assert!(!matches.is_empty());
    for pair in matches.windows(2) {
        assert!(pair[0].match_percentage >= pair[1].match_percentage);
    }
}

#[test]
fn species_with_no_assignments_survives_only_the_empty_selection() {
    let catalog = vec![species(50, &[]), species(10, &[(1, "tubes")])];

    let all = match_species(&[], &catalog);
    assert_eq!(all.len(), 2);

    let filtered = match_species(&selection(&[(1, "tubes")]), &catalog);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].species_id, 10);
}
