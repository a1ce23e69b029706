use crate::error::PickerError;
use crate::model::TableRow;

mod wiki_table;

pub use self::wiki_table::WikiTableExtractor;

pub trait Extractor {
    fn extract(&self, document: &str) -> Result<Vec<TableRow>, PickerError>;
}
