use mycoguide::db::Db;
use mycoguide::models::{
    AnswerOptionSeed, AssignmentSeed, CatalogSeed, CharacteristicOptionSeed, CharacteristicSeed,
    LookalikeSeed, QuestionSeed, QuizSeed, SpeciesSeed,
};

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("mycoguide_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}", path.display());
    Db::new(&url).await.expect("failed to create test database")
}

fn species(name: &str, latin: &str, species_type: &str, edibility: &str) -> SpeciesSeed {
    SpeciesSeed {
        name: name.to_string(),
        latin_name: latin.to_string(),
        species_type: species_type.to_string(),
        edibility: edibility.to_string(),
        description: format!("{name} description"),
        habitat: "coniferous forest".to_string(),
        season: "June to October".to_string(),
        distribution: String::new(),
        key_features: String::new(),
        warning: String::new(),
        cooking_tips: String::new(),
    }
}

fn assignment(species: &str, characteristic: &str, value: &str) -> AssignmentSeed {
    AssignmentSeed {
        species: species.to_string(),
        characteristic: characteristic.to_string(),
        value: value.to_string(),
    }
}

/// A small but complete catalog: three species with trait assignments,
/// one lookalike edge, and one quiz of two questions.
pub fn sample_catalog() -> CatalogSeed {
    CatalogSeed {
        species: vec![
            species("Porcini", "Boletus edulis", "tubular", "edible"),
            species("Chanterelle", "Cantharellus cibarius", "lamellar", "edible"),
            species("Death Cap", "Amanita phalloides", "lamellar", "deadly"),
        ],
        characteristics: vec![
            CharacteristicSeed {
                name: "underside".to_string(),
                question: "What does the underside of the cap look like?".to_string(),
                order: 1,
                is_important: true,
                options: vec![
                    CharacteristicOptionSeed {
                        value: "tubes".to_string(),
                        label: "Tubes (sponge-like)".to_string(),
                    },
                    CharacteristicOptionSeed {
                        value: "gills".to_string(),
                        label: "Gills".to_string(),
                    },
                ],
            },
            CharacteristicSeed {
                name: "ring".to_string(),
                question: "Does the stem carry a ring?".to_string(),
                order: 2,
                is_important: false,
                options: vec![
                    CharacteristicOptionSeed {
                        value: "yes".to_string(),
                        label: "Yes".to_string(),
                    },
                    CharacteristicOptionSeed {
                        value: "no".to_string(),
                        label: "No".to_string(),
                    },
                ],
            },
        ],
        assignments: vec![
            assignment("Porcini", "underside", "tubes"),
            assignment("Porcini", "ring", "no"),
            assignment("Chanterelle", "underside", "gills"),
            assignment("Chanterelle", "ring", "no"),
            assignment("Death Cap", "underside", "gills"),
            assignment("Death Cap", "ring", "yes"),
        ],
        lookalikes: vec![LookalikeSeed {
            species: "Chanterelle".to_string(),
            lookalike: "Death Cap".to_string(),
            danger_level: "deadly".to_string(),
            differences: "The death cap carries a ring and a sack at the stem base".to_string(),
            visual_differences: String::new(),
            warning: "Never pick gilled mushrooms with a ring unless certain".to_string(),
        }],
        quizzes: vec![QuizSeed {
            name: "Beginner Quiz".to_string(),
            level: "beginner".to_string(),
            description: "The basics".to_string(),
            question_count: None,
            questions: vec![
                QuestionSeed {
                    text: "Which species is deadly poisonous?".to_string(),
                    is_multiple_choice: false,
                    options: vec![
                        AnswerOptionSeed {
                            text: "Porcini".to_string(),
                            is_answer: false,
                        },
                        AnswerOptionSeed {
                            text: "Death Cap".to_string(),
                            is_answer: true,
                        },
                    ],
                },
                QuestionSeed {
                    text: "Which species are edible?".to_string(),
                    is_multiple_choice: true,
                    options: vec![
                        AnswerOptionSeed {
                            text: "Porcini".to_string(),
                            is_answer: true,
                        },
                        AnswerOptionSeed {
                            text: "Chanterelle".to_string(),
                            is_answer: true,
                        },
                        AnswerOptionSeed {
                            text: "Death Cap".to_string(),
                            is_answer: false,
                        },
                    ],
                },
            ],
        }],
    }
}
