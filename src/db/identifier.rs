use std::collections::HashMap;

use color_eyre::Result;

use super::models::{CharacteristicModel, CharacteristicOptionModel};
use super::Db;
use crate::identifier::SpeciesTraits;

impl Db {
    /// All characteristics in identifier order, each with its enumerated
    /// options.
    pub async fn characteristics_with_options(&self) -> Result<Vec<CharacteristicModel>> {
        let rows = sqlx::query_as::<_, (i64, String, String, bool)>(
            "SELECT id, name, question, is_important FROM characteristics ORDER BY sort_order, id",
        )
        .fetch_all(&self.pool)
        .await?;

        let options = sqlx::query_as::<_, CharacteristicOptionModel>(
            r#"
            SELECT co.id, co.characteristic_id, co.value, co.label
            FROM characteristic_options co
            JOIN characteristics c ON c.id = co.characteristic_id
            ORDER BY c.sort_order, c.id, co.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_characteristic: HashMap<i64, Vec<CharacteristicOptionModel>> = HashMap::new();
        for option in options {
            by_characteristic
                .entry(option.characteristic_id)
                .or_default()
                .push(option);
        }

        Ok(rows
            .into_iter()
            .map(|(id, name, question, is_important)| CharacteristicModel {
                id,
                name,
                question,
                is_important,
                options: by_characteristic.remove(&id).unwrap_or_default(),
            })
            .collect())
    }

    /// The matcher's ground truth: every species in catalog order with
    /// its recorded (characteristic, value) assignments. Species without
    /// assignments are included with an empty map so an empty selection
    /// still returns the whole catalog.
    pub async fn species_traits(&self) -> Result<Vec<SpeciesTraits>> {
        let species_ids: Vec<i64> =
            sqlx::query_scalar("SELECT id FROM species ORDER BY name, id")
                .fetch_all(&self.pool)
                .await?;

        let assignment_rows = sqlx::query_as::<_, (i64, i64, String)>(
            r#"
            SELECT sc.species_id, sc.characteristic_id, co.value
            FROM species_characteristics sc
            JOIN characteristic_options co ON co.id = sc.option_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut assignments: HashMap<i64, HashMap<i64, String>> = HashMap::new();
        for (species_id, characteristic_id, value) in assignment_rows {
            assignments
                .entry(species_id)
                .or_default()
                .insert(characteristic_id, value);
        }

        Ok(species_ids
            .into_iter()
            .map(|species_id| SpeciesTraits {
                species_id,
                assignments: assignments.remove(&species_id).unwrap_or_default(),
            })
            .collect())
    }
}
