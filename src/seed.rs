// src/seed.rs

//! Demo data for development databases

use crate::db::models::Ingredient;
use crate::error::Result;
use crate::store::IngredientStore;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

/// Number of ingredients inserted when no count is given
pub const DEFAULT_SEED_COUNT: usize = 10;

/// Lowest and highest generated price; whole units
const PRICE_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

const WORDS: &[&str] = &[
    "ail", "aneth", "basilic", "beurre", "cannelle", "carotte", "céleri", "cerfeuil",
    "champignon", "chocolat", "ciboulette", "citron", "coriandre", "courgette", "crème",
    "cumin", "échalote", "épinard", "estragon", "farine", "fenouil", "fromage", "gingembre",
    "lait", "laurier", "levure", "miel", "moutarde", "muscade", "noisette", "oignon",
    "olive", "orge", "origan", "paprika", "persil", "poireau", "poivre", "pomme",
    "romarin", "safran", "sarrasin", "sauge", "semoule", "sucre", "thym", "tomate",
    "vanille", "vinaigre",
];

/// Build `count` unsaved ingredients with random names and prices
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Ingredient> {
    (0..count)
        .map(|_| {
            let name = WORDS.choose(rng).copied().unwrap_or("sel");
            let price = rng.gen_range(PRICE_RANGE);
            Ingredient::with_values(name, f64::from(price))
        })
        .collect()
}

/// Insert `count` random ingredients, returning their ids
pub fn seed<S: IngredientStore + ?Sized>(store: &mut S, count: usize) -> Result<Vec<i64>> {
    let mut rng = rand::thread_rng();
    let mut ids = Vec::with_capacity(count);

    for mut ingredient in generate(&mut rng, count) {
        store.save(&mut ingredient)?;
        ids.extend(ingredient.id());
    }

    info!("Seeded {} ingredients", ids.len());
    Ok(ids)
}
