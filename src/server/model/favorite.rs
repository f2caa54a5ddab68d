use std::fmt;

/// The kind of entity a favorite points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Character,
    Planet,
    Ship,
}

impl FavoriteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Planet => "planet",
            Self::Ship => "ship",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
