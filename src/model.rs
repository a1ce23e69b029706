use std::fmt;

/// Number of fields in a persisted record.
pub const RECORD_FIELDS: usize = 5;

/// One projected table row: number, sprite cell, German, English and
/// romaji names, still carrying their wiki markup.
pub type TableRow = [String; RECORD_FIELDS];

/// A single Pokémon as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// National Pokédex number, e.g. `001`
    pub id: String,
    /// Absolute URL of the sprite image
    pub sprite_url: String,
    /// German name
    pub name_local: String,
    /// English name
    pub name_foreign: String,
    /// Japanese name in romaji transcription
    pub name_transcribed: String,
}

impl Record {
    /// Fields in their persisted order.
    pub fn fields(&self) -> [&str; RECORD_FIELDS] {
        [
            self.id.as_str(),
            self.sprite_url.as_str(),
            self.name_local.as_str(),
            self.name_foreign.as_str(),
            self.name_transcribed.as_str(),
        ]
    }

    pub fn from_row(row: TableRow) -> Self {
        let [id, sprite_url, name_local, name_foreign, name_transcribed] = row;
        Self {
            id,
            sprite_url,
            name_local,
            name_foreign,
            name_transcribed,
        }
    }

    pub fn into_row(self) -> TableRow {
        [
            self.id,
            self.sprite_url,
            self.name_local,
            self.name_foreign,
            self.name_transcribed,
        ]
    }
}

/// Console rendering of a picked Pokémon.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your Pokémon:")?;
        writeln!(f, "#{}", self.id)?;
        writeln!(f, "German: {}", self.name_local)?;
        writeln!(f, "English: {}", self.name_foreign)?;
        writeln!(f, "Japanese (romaji): {}", self.name_transcribed)?;
        write!(f, "{}", self.sprite_url)
    }
}
