//! Species definitions and catalog generation
//!
//! A species is an immutable record of named stat bonuses. The catalog is
//! rolled once at meadow construction and owned there for the process
//! lifetime; ants and colonies refer to entries by `SpeciesId`.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::types::SpeciesId;

/// An immutable species record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub id: SpeciesId,
    pub name: String,
    pub strength_bonus: u32,
    pub efficiency_bonus: u32,
    pub harvest_bonus: u32,
}

/// The fixed catalog of species available in a meadow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCatalog {
    species: Vec<Species>,
}

impl SpeciesCatalog {
    /// Roll the catalog from config
    ///
    /// Produces `species_count` entries named `Species{i}`, each bonus drawn
    /// independently and uniformly from the configured inclusive range.
    pub fn generate(config: &SimulationConfig, rng: &mut ChaCha8Rng) -> Self {
        let lo = config.species_bonus_min;
        let hi = config.species_bonus_max;

        let species = (0..config.species_count)
            .map(|i| Species {
                id: SpeciesId(i),
                name: format!("Species{}", i),
                strength_bonus: rng.gen_range(lo..=hi),
                efficiency_bonus: rng.gen_range(lo..=hi),
                harvest_bonus: rng.gen_range(lo..=hi),
            })
            .collect();

        Self { species }
    }

    pub fn get(&self, id: SpeciesId) -> Option<&Species> {
        self.species.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.species.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_catalog_size_and_names() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let catalog = SpeciesCatalog::generate(&config, &mut rng);

        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.get(SpeciesId(0)).map(|s| s.name.as_str()), Some("Species0"));
        assert_eq!(catalog.get(SpeciesId(11)).map(|s| s.name.as_str()), Some("Species11"));
        assert!(catalog.get(SpeciesId(12)).is_none());
    }

    #[test]
    fn test_bonuses_within_configured_range() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let catalog = SpeciesCatalog::generate(&config, &mut rng);

        for species in catalog.iter() {
            for bonus in [
                species.strength_bonus,
                species.efficiency_bonus,
                species.harvest_bonus,
            ] {
                assert!(
                    (5..=9).contains(&bonus),
                    "{} rolled {} outside [5, 9]",
                    species.name,
                    bonus
                );
            }
        }
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let config = SimulationConfig::default();
        let a = SpeciesCatalog::generate(&config, &mut ChaCha8Rng::seed_from_u64(99));
        let b = SpeciesCatalog::generate(&config, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_bonus_range() {
        let config = SimulationConfig {
            species_bonus_min: 6,
            species_bonus_max: 6,
            ..SimulationConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let catalog = SpeciesCatalog::generate(&config, &mut rng);
        assert!(catalog.iter().all(|s| s.strength_bonus == 6
            && s.efficiency_bonus == 6
            && s.harvest_bonus == 6));
    }
}
