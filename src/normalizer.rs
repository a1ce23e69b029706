use crate::model::{Record, TableRow};

/// Strips the leftover cell markup around the Pokédex number.
pub fn clean_id(cell: &str) -> &str {
    cell.trim_matches(|c: char| c.is_whitespace() || c == '|')
}

/// Strips the wiki link brackets around the German name.
pub fn clean_local_name(cell: &str) -> &str {
    cell.trim_matches(|c: char| c.is_whitespace() || c == '[' || c == ']')
}

/// `sprite_base_url` is used verbatim, so it should end with a `/`.
pub fn sprite_url(sprite_base_url: &str, id: &str) -> String {
    format!("{sprite_base_url}{id}.png")
}

/// Turns projected table rows into records.
///
/// The number and German name are cleaned, and the sprite cell is replaced by
/// an absolute URL built from the cleaned number. English and romaji names are
/// kept as they are.
pub fn normalize(rows: Vec<TableRow>, sprite_base_url: &str) -> Vec<Record> {
    rows.into_iter()
        .map(|row| {
            let [id, _sprite, name_local, name_foreign, name_transcribed] = row;
            let id = clean_id(&id).to_string();

            Record {
                sprite_url: sprite_url(sprite_base_url, &id),
                name_local: clean_local_name(&name_local).to_string(),
                id,
                name_foreign,
                name_transcribed,
            }
        })
        .collect()
}
