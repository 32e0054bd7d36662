//! Game tuning values with defaults, CSV parsing and persistence.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ConfigError, ParseError};
use crate::schema::{FIELD_COUNT, FIELDS, FieldKind, SEPARATOR, header_line};

/// File name of the configuration resource inside the assets directory.
pub const CONFIG_FILE_NAME: &str = "ConfigurationData.csv";

/// Tunable gameplay values.
///
/// Built once at startup and handed to the systems that need it. Fields are
/// private; the accessors return the stored value unchanged. Spawn
/// probabilities are held as fractions, already divided by 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameConfig {
    paddle_move_units_per_second: f32,
    ball_impulse_force: f32,
    ball_life_seconds: f32,
    min_spawn_delay: f32,
    max_spawn_delay: f32,
    standard_points: i32,
    standard_hits: i32,
    bonus_points: i32,
    bonus_hits: i32,
    freezer_seconds: f32,
    speedup_seconds: f32,
    speedup_factor: f32,
    standard_ball_spawn_probability: f32,
    bonus_ball_spawn_probability: f32,
    freezer_pickup_spawn_probability: f32,
    speedup_pickup_spawn_probability: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            paddle_move_units_per_second: 10.0,
            ball_impulse_force: 5.0,
            ball_life_seconds: 10.0,
            min_spawn_delay: 5.0,
            max_spawn_delay: 10.0,
            standard_points: 1,
            standard_hits: 1,
            bonus_points: 2,
            bonus_hits: 2,
            freezer_seconds: 2.0,
            speedup_seconds: 2.0,
            speedup_factor: 2.0,
            standard_ball_spawn_probability: 0.6,
            bonus_ball_spawn_probability: 0.2,
            freezer_pickup_spawn_probability: 0.1,
            speedup_pickup_spawn_probability: 0.1,
        }
    }
}

// --- Accessors ---

impl GameConfig {
    /// Paddle movement speed in units per second.
    #[must_use]
    pub const fn paddle_move_units_per_second(&self) -> f32 {
        self.paddle_move_units_per_second
    }

    /// Impulse force applied to launch a ball.
    #[must_use]
    pub const fn ball_impulse_force(&self) -> f32 {
        self.ball_impulse_force
    }

    /// Seconds a ball stays alive.
    #[must_use]
    pub const fn ball_life_seconds(&self) -> f32 {
        self.ball_life_seconds
    }

    /// Minimum delay between ball spawns.
    #[must_use]
    pub const fn min_spawn_delay(&self) -> f32 {
        self.min_spawn_delay
    }

    /// Maximum delay between ball spawns.
    #[must_use]
    pub const fn max_spawn_delay(&self) -> f32 {
        self.max_spawn_delay
    }

    /// Points a standard ball is worth.
    #[must_use]
    pub const fn standard_points(&self) -> i32 {
        self.standard_points
    }

    /// Hits a standard ball is worth.
    #[must_use]
    pub const fn standard_hits(&self) -> i32 {
        self.standard_hits
    }

    /// Points a bonus ball is worth.
    #[must_use]
    pub const fn bonus_points(&self) -> i32 {
        self.bonus_points
    }

    /// Hits a bonus ball is worth.
    #[must_use]
    pub const fn bonus_hits(&self) -> i32 {
        self.bonus_hits
    }

    /// Duration of the freezer effect in seconds.
    #[must_use]
    pub const fn freezer_seconds(&self) -> f32 {
        self.freezer_seconds
    }

    /// Duration of the speedup effect in seconds.
    #[must_use]
    pub const fn speedup_seconds(&self) -> f32 {
        self.speedup_seconds
    }

    /// Ball speed multiplier while the speedup effect is active.
    #[must_use]
    pub const fn speedup_factor(&self) -> f32 {
        self.speedup_factor
    }

    /// Probability (0.0 - 1.0) of spawning a standard ball.
    #[must_use]
    pub const fn standard_ball_spawn_probability(&self) -> f32 {
        self.standard_ball_spawn_probability
    }

    /// Probability (0.0 - 1.0) of spawning a bonus ball.
    #[must_use]
    pub const fn bonus_ball_spawn_probability(&self) -> f32 {
        self.bonus_ball_spawn_probability
    }

    /// Probability (0.0 - 1.0) of spawning a freezer pickup.
    #[must_use]
    pub const fn freezer_pickup_spawn_probability(&self) -> f32 {
        self.freezer_pickup_spawn_probability
    }

    /// Probability (0.0 - 1.0) of spawning a speedup pickup.
    #[must_use]
    pub const fn speedup_pickup_spawn_probability(&self) -> f32 {
        self.speedup_pickup_spawn_probability
    }
}

// --- Parsing ---

/// Walks the tokens of a values line in schema order.
struct Tokens<'a> {
    tokens: Vec<&'a str>,
    next: usize,
}

impl<'a> Tokens<'a> {
    fn split(line: &'a str) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = line.split(SEPARATOR).collect();
        // Tokens past the last field (e.g. a trailing comma) are ignored.
        if tokens.len() < FIELD_COUNT {
            return Err(ParseError::TokenCount {
                expected: FIELD_COUNT,
                found: tokens.len(),
            });
        }
        Ok(Self { tokens, next: 0 })
    }

    fn take(&mut self, kind: FieldKind) -> &'a str {
        debug_assert_eq!(FIELDS[self.next].kind, kind, "schema/struct order mismatch");
        let token = self.tokens[self.next];
        self.next += 1;
        token
    }

    fn float(&mut self) -> Result<f32, ParseError> {
        parse_number(self.take(FieldKind::Float))
    }

    fn integer(&mut self) -> Result<i32, ParseError> {
        parse_number(self.take(FieldKind::Integer))
    }

    fn percent(&mut self) -> Result<f32, ParseError> {
        parse_number::<f32>(self.take(FieldKind::Percent)).map(|p| p / 100.0)
    }
}

fn parse_number<T: FromStr>(token: &str) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        token: token.to_string(),
    })
}

impl FromStr for GameConfig {
    type Err = ParseError;

    /// Parses a values line. Either every field parses or nothing is returned.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut t = Tokens::split(line)?;
        // Field initializers are evaluated in the order written, which is file order.
        Ok(Self {
            paddle_move_units_per_second: t.float()?,
            ball_impulse_force: t.float()?,
            ball_life_seconds: t.float()?,
            min_spawn_delay: t.float()?,
            max_spawn_delay: t.float()?,
            standard_points: t.integer()?,
            standard_hits: t.integer()?,
            bonus_points: t.integer()?,
            bonus_hits: t.integer()?,
            freezer_seconds: t.float()?,
            speedup_seconds: t.float()?,
            speedup_factor: t.float()?,
            standard_ball_spawn_probability: t.percent()?,
            bonus_ball_spawn_probability: t.percent()?,
            freezer_pickup_spawn_probability: t.percent()?,
            speedup_pickup_spawn_probability: t.percent()?,
        })
    }
}

impl GameConfig {
    /// Parse a single comma-separated values line.
    pub fn parse_line(line: &str) -> Result<Self, ParseError> {
        line.parse()
    }

    /// Render the values line, probabilities written back as percentages.
    pub fn to_values_line(&self) -> String {
        let tokens = [
            self.paddle_move_units_per_second.to_string(),
            self.ball_impulse_force.to_string(),
            self.ball_life_seconds.to_string(),
            self.min_spawn_delay.to_string(),
            self.max_spawn_delay.to_string(),
            self.standard_points.to_string(),
            self.standard_hits.to_string(),
            self.bonus_points.to_string(),
            self.bonus_hits.to_string(),
            self.freezer_seconds.to_string(),
            self.speedup_seconds.to_string(),
            self.speedup_factor.to_string(),
            percent_token(self.standard_ball_spawn_probability),
            percent_token(self.bonus_ball_spawn_probability),
            percent_token(self.freezer_pickup_spawn_probability),
            percent_token(self.speedup_pickup_spawn_probability),
        ];
        tokens.join(&SEPARATOR.to_string())
    }

    /// Render the full two-line resource (header, then values).
    pub fn to_csv(&self) -> String {
        format!("{}\n{}\n", header_line(), self.to_values_line())
    }
}

/// Formats a fraction as a percentage token that parses back to the same
/// fraction.
///
/// Prefers shifting the decimal point of the shortest representation, so `0.6`
/// becomes `60` rather than `60.000004`. When that text does not divide back
/// to `fraction`, the nearby `f32` percentages are searched for one that does.
fn percent_token(fraction: f32) -> String {
    let shifted = shift_decimal(fraction);
    if divides_back(&shifted, fraction) {
        return shifted;
    }

    let estimate = ((f64::from(fraction) * 100.0) as f32).to_bits();
    (0..=4u32)
        .flat_map(|k| [estimate.wrapping_add(k), estimate.wrapping_sub(k)])
        .map(f32::from_bits)
        .find(|p| *p / 100.0 == fraction)
        .map(|p| p.to_string())
        .unwrap_or(shifted)
}

fn divides_back(token: &str, fraction: f32) -> bool {
    token
        .parse::<f32>()
        .is_ok_and(|p| p / 100.0 == fraction)
}

/// `fraction` times 100, done on its decimal text.
fn shift_decimal(fraction: f32) -> String {
    let text = fraction.to_string();
    if !fraction.is_finite() {
        return text;
    }
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
    let frac = format!("{frac:0<2}");
    let (moved, rest) = frac.split_at(2);
    let joined = format!("{whole}{moved}");
    let whole = match joined.trim_start_matches('0') {
        "" => "0",
        w => w,
    };
    if rest.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{rest}")
    }
}

// --- Load / Save / Reload ---

/// Path of the configuration resource inside `assets_dir`.
pub fn resource_path(assets_dir: &Path) -> PathBuf {
    assets_dir.join(CONFIG_FILE_NAME)
}

impl GameConfig {
    /// Load the resource at `path`.
    ///
    /// The first line is skipped unread; the second is parsed. The file is
    /// closed before this returns, on every path.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ResourceUnavailable`] if the file cannot be opened or read,
    /// [`ConfigError::MalformedData`] if the values line is absent or invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let unavailable = |source| ConfigError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        let mut reader = BufReader::new(file);

        // The header is raw bytes: it need not even be valid UTF-8.
        reader
            .read_until(b'\n', &mut Vec::new())
            .map_err(unavailable)?;

        let mut values = String::new();
        if reader.read_line(&mut values).map_err(unavailable)? == 0 {
            return Err(ParseError::MissingValues.into());
        }
        let values = values.strip_suffix('\n').unwrap_or(&values);
        let values = values.strip_suffix('\r').unwrap_or(values);

        let config = Self::parse_line(values)?;
        log::info!("Loaded game config from {}", path.display());
        Ok(config)
    }

    /// Load `ConfigurationData.csv` from `assets_dir`.
    ///
    /// # Errors
    ///
    /// See [`GameConfig::load`].
    pub fn load_from_dir(assets_dir: &Path) -> Result<Self, ConfigError> {
        Self::load(&resource_path(assets_dir))
    }

    /// Load from `assets_dir`, falling back to [`GameConfig::default`] on any
    /// failure. The error is logged, never returned.
    #[must_use]
    pub fn load_or_default(assets_dir: &Path) -> Self {
        match Self::load_from_dir(assets_dir) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default game config");
                Self::default()
            }
        }
    }

    /// Load from `assets_dir`, or write and return the defaults if the resource
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing resource fails to load or the default
    /// resource cannot be written.
    pub fn load_or_create(assets_dir: &Path) -> Result<Self, ConfigError> {
        let path = resource_path(assets_dir);

        if path.exists() {
            Self::load(&path)
        } else {
            let config = Self::default();
            config.save(assets_dir)?;
            log::info!("Created default game config at {}", path.display());
            Ok(config)
        }
    }

    /// Re-read the resource into `self`.
    ///
    /// On error `self` is left exactly as it was.
    ///
    /// # Errors
    ///
    /// See [`GameConfig::load`].
    pub fn reload(&mut self, assets_dir: &Path) -> Result<(), ConfigError> {
        *self = Self::load_from_dir(assets_dir)?;
        Ok(())
    }

    /// Write the resource to `assets_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// [`ConfigError::WriteError`] if the directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self, assets_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(assets_dir).map_err(ConfigError::WriteError)?;
        std::fs::write(resource_path(assets_dir), self.to_csv())
            .map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
