//! Game setup configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Geometry;
use crate::engine::GameEngine;
use crate::error::GameError;
use crate::strategy::{self, Strategy};

/// Board geometry plus a named strategy per side
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSetup {
    pub geometry: Geometry,
    /// Strategy name for the first player (see `strategy::by_name`)
    pub black: String,
    /// Strategy name for the second player
    pub white: String,
    /// Seed for seeded strategies; White derives its stream from seed + 1
    #[serde(default)]
    pub seed: u64,
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            geometry: Geometry::Hex { radius: 3 },
            black: "lookahead".to_string(),
            white: "greedy".to_string(),
            seed: 0,
        }
    }
}

impl GameSetup {
    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let setup: GameSetup = serde_json::from_str(&content)?;
        setup.geometry.validate()?;
        Ok(setup)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the engine and both strategies
    #[allow(clippy::type_complexity)]
    pub fn build(
        &self,
    ) -> Result<(GameEngine, Box<dyn Strategy>, Box<dyn Strategy>), GameError> {
        let engine = GameEngine::new(self.geometry)?;
        let black = strategy::by_name(&self.black, self.seed)?;
        let white = strategy::by_name(&self.white, self.seed.wrapping_add(1))?;
        Ok((engine, black, white))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builds() {
        let setup = GameSetup::default();
        let (engine, _, _) = setup.build().unwrap();
        assert!(!engine.is_game_over());
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let setup = GameSetup {
            black: "psychic".to_string(),
            ..GameSetup::default()
        };
        assert!(matches!(
            setup.build(),
            Err(GameError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bad_geometry_rejected() {
        let setup = GameSetup {
            geometry: Geometry::Hex { radius: 0 },
            ..GameSetup::default()
        };
        assert!(matches!(setup.build(), Err(GameError::InvalidArgument(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let setup = GameSetup {
            geometry: Geometry::Square { side: 6 },
            black: "random".to_string(),
            white: "heuristic".to_string(),
            seed: 99,
        };
        let path = std::env::temp_dir().join("reversi-setup-round-trip.json");
        setup.save(&path).unwrap();
        let loaded = GameSetup::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.geometry, setup.geometry);
        assert_eq!(loaded.black, setup.black);
        assert_eq!(loaded.white, setup.white);
        assert_eq!(loaded.seed, setup.seed);
    }
}
