use color_eyre::Result;

use super::models::{LookalikeModel, SpeciesModel, SpeciesSummary, SpeciesTraitLabel};
use super::Db;

const SUMMARY_COLUMNS: &str = "id, name, latin_name, species_type, edibility";

impl Db {
    /// The whole catalog in catalog order (by name).
    pub async fn all_species(&self) -> Result<Vec<SpeciesSummary>> {
        let species = sqlx::query_as::<_, SpeciesSummary>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM species ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(species)
    }

    pub async fn edible_species(&self) -> Result<Vec<SpeciesSummary>> {
        let species = sqlx::query_as::<_, SpeciesSummary>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM species WHERE edibility IN ('edible', 'conditionally_edible') ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(species)
    }

    pub async fn poisonous_species(&self) -> Result<Vec<SpeciesSummary>> {
        let species = sqlx::query_as::<_, SpeciesSummary>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM species WHERE edibility IN ('poisonous', 'deadly') ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(species)
    }

    pub async fn get_species(&self, species_id: i64) -> Result<Option<SpeciesModel>> {
        let species = sqlx::query_as::<_, SpeciesModel>("SELECT * FROM species WHERE id = $1")
            .bind(species_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(species)
    }

    pub async fn lookalikes_for(&self, species_id: i64) -> Result<Vec<LookalikeModel>> {
        let lookalikes = sqlx::query_as::<_, LookalikeModel>(
            r#"
            SELECT l.lookalike_id, s.name, s.latin_name, s.edibility,
                   l.danger_level, l.differences, l.visual_differences, l.warning
            FROM lookalikes l
            JOIN species s ON s.id = l.lookalike_id
            WHERE l.species_id = $1
            ORDER BY s.name
            "#,
        )
        .bind(species_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lookalikes)
    }

    /// Up to `limit` species of the same morphology and edibility tier,
    /// shown as "similar species" on the detail page.
    pub async fn similar_species(
        &self,
        species_type: &str,
        edibility: &str,
        exclude_id: i64,
        limit: i64,
    ) -> Result<Vec<SpeciesSummary>> {
        let species = sqlx::query_as::<_, SpeciesSummary>(&format!(
            r#"
            SELECT {SUMMARY_COLUMNS} FROM species
            WHERE species_type = $1 AND edibility = $2 AND id != $3
            ORDER BY name
            LIMIT $4
            "#
        ))
        .bind(species_type)
        .bind(edibility)
        .bind(exclude_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(species)
    }

    /// Case-insensitive substring search over the descriptive fields.
    pub async fn search_species(&self, query: &str) -> Result<Vec<SpeciesSummary>> {
        let pattern = format!("%{query}%");

        let species = sqlx::query_as::<_, SpeciesSummary>(&format!(
            r#"
            SELECT {SUMMARY_COLUMNS} FROM species
            WHERE name LIKE $1 OR latin_name LIKE $1 OR description LIKE $1 OR habitat LIKE $1
            ORDER BY name
            "#
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(species)
    }

    /// Recorded trait values of one species, labeled for the detail page.
    pub async fn species_trait_labels(&self, species_id: i64) -> Result<Vec<SpeciesTraitLabel>> {
        let traits = sqlx::query_as::<_, SpeciesTraitLabel>(
            r#"
            SELECT c.question AS characteristic, co.label AS label
            FROM species_characteristics sc
            JOIN characteristics c ON c.id = sc.characteristic_id
            JOIN characteristic_options co ON co.id = sc.option_id
            WHERE sc.species_id = $1
            ORDER BY c.sort_order, c.id
            "#,
        )
        .bind(species_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(traits)
    }
}
