//! Ball and pickup spawn selection driven by the configured probabilities.

use paddle_config::GameConfig;

/// What the spawner produces on a spawn tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    StandardBall,
    BonusBall,
    FreezerPickup,
    SpeedupPickup,
}

/// Spawn weights and delay range taken from a [`GameConfig`].
#[derive(Debug, Clone)]
pub struct SpawnTable {
    entries: [(SpawnKind, f32); 4],
    min_delay: f32,
    max_delay: f32,
}

impl SpawnTable {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            entries: [
                (SpawnKind::StandardBall, config.standard_ball_spawn_probability()),
                (SpawnKind::BonusBall, config.bonus_ball_spawn_probability()),
                (SpawnKind::FreezerPickup, config.freezer_pickup_spawn_probability()),
                (SpawnKind::SpeedupPickup, config.speedup_pickup_spawn_probability()),
            ],
            min_delay: config.min_spawn_delay(),
            max_delay: config.max_spawn_delay(),
        }
    }

    /// Pick a spawn for a uniform roll in `[0, 1)`.
    ///
    /// Probabilities are not normalized; a roll beyond their sum falls through
    /// to a standard ball.
    pub fn choose(&self, roll: f32) -> SpawnKind {
        let mut upper = 0.0;
        for &(kind, probability) in &self.entries {
            upper += probability;
            if roll < upper {
                return kind;
            }
        }
        SpawnKind::StandardBall
    }

    /// Delay before the next spawn for a uniform roll in `[0, 1)`.
    pub fn spawn_delay(&self, roll: f32) -> f32 {
        self.min_delay + (self.max_delay - self.min_delay) * roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = SpawnTable::new(&GameConfig::default());
        assert_eq!(table.choose(0.0), SpawnKind::StandardBall);
        assert_eq!(table.choose(0.59), SpawnKind::StandardBall);
        assert_eq!(table.choose(0.65), SpawnKind::BonusBall);
        assert_eq!(table.choose(0.85), SpawnKind::FreezerPickup);
        assert_eq!(table.choose(0.95), SpawnKind::SpeedupPickup);
    }

    #[test]
    fn test_roll_past_total_is_standard() {
        let config = GameConfig::parse_line("10,5,10,5,10,1,1,2,2,2,2,2,10,10,10,10").unwrap();
        let table = SpawnTable::new(&config);
        assert_eq!(table.choose(0.15), SpawnKind::BonusBall);
        assert_eq!(table.choose(0.9), SpawnKind::StandardBall);
    }

    #[test]
    fn test_spawn_delay_range() {
        let table = SpawnTable::new(&GameConfig::default());
        assert_eq!(table.spawn_delay(0.0), 5.0);
        assert_eq!(table.spawn_delay(0.5), 7.5);
    }

    #[test]
    fn test_spawn_delay_follows_loaded_config() {
        let config = GameConfig::parse_line("10,5,10,2,4,1,1,2,2,2,2,2,60,20,10,10").unwrap();
        let table = SpawnTable::new(&config);
        assert_eq!(table.spawn_delay(0.0), 2.0);
        assert_eq!(table.spawn_delay(0.5), 3.0);
    }
}
