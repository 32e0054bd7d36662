//! Positional schema of the configuration resource.
//!
//! The values line carries one token per entry of [`FIELDS`], in order. There is
//! no name-based lookup: the header line is written from this table but never
//! read back.

/// How a token is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain `f32`.
    Float,
    /// Plain `i32`.
    Integer,
    /// `f32` percentage in the file, stored as a fraction (token / 100).
    Percent,
}

/// One column of the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Column name as written in the header line.
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Number of values on the values line.
pub const FIELD_COUNT: usize = 16;

/// Token separator. No quoting or escaping is supported.
pub const SEPARATOR: char = ',';

/// Every field, in file order.
pub const FIELDS: [FieldDescriptor; FIELD_COUNT] = [
    FieldDescriptor::new("paddleMoveUnitsPerSecond", FieldKind::Float),
    FieldDescriptor::new("ballImpulseForce", FieldKind::Float),
    FieldDescriptor::new("ballLifeSeconds", FieldKind::Float),
    FieldDescriptor::new("minSpawnDelay", FieldKind::Float),
    FieldDescriptor::new("maxSpawnDelay", FieldKind::Float),
    FieldDescriptor::new("standardPoints", FieldKind::Integer),
    FieldDescriptor::new("standardHits", FieldKind::Integer),
    FieldDescriptor::new("bonusPoints", FieldKind::Integer),
    FieldDescriptor::new("bonusHits", FieldKind::Integer),
    FieldDescriptor::new("freezerSeconds", FieldKind::Float),
    FieldDescriptor::new("speedupSeconds", FieldKind::Float),
    FieldDescriptor::new("speedupFactor", FieldKind::Float),
    FieldDescriptor::new("standardBallSpawnProbability", FieldKind::Percent),
    FieldDescriptor::new("bonusBallSpawnProbability", FieldKind::Percent),
    FieldDescriptor::new("freezerPickupSpawnProbability", FieldKind::Percent),
    FieldDescriptor::new("speedupPickupSpawnProbability", FieldKind::Percent),
];

/// The header line, column names joined by [`SEPARATOR`].
pub fn header_line() -> String {
    FIELDS
        .iter()
        .map(|f| f.name)
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_layout() {
        let kinds: Vec<FieldKind> = FIELDS.iter().map(|f| f.kind).collect();
        assert!(kinds[0..5].iter().all(|k| *k == FieldKind::Float));
        assert!(kinds[5..9].iter().all(|k| *k == FieldKind::Integer));
        assert!(kinds[9..12].iter().all(|k| *k == FieldKind::Float));
        assert!(kinds[12..16].iter().all(|k| *k == FieldKind::Percent));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = FIELDS.iter().map(|f| f.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FIELD_COUNT);
    }

    #[test]
    fn test_header_line() {
        let header = header_line();
        assert!(header.starts_with("paddleMoveUnitsPerSecond,ballImpulseForce,"));
        assert!(header.ends_with(",speedupPickupSpawnProbability"));
        assert_eq!(header.split(SEPARATOR).count(), FIELD_COUNT);
    }
}
