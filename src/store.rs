use crate::error::PickerError;
use crate::model::{Record, TableRow};
use log::{debug, info, warn};
use rand::Rng;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Field separator of the store file.
pub const DELIMITER: char = ';';

/// Flat file holding one `;`-separated record per line.
///
/// There is no header and no escaping, so [`Store::write`] refuses records
/// whose fields contain the delimiter or a line break.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Writes all records, replacing any previous store.
    ///
    /// Returns `true` if an existing file was overwritten.
    pub fn write(&self, records: &[Record]) -> Result<bool, PickerError> {
        for record in records {
            if record
                .fields()
                .iter()
                .any(|f| f.contains(DELIMITER) || f.contains(&['\n', '\r'][..]))
            {
                return Err(PickerError::DelimiterInField {
                    id: record.id.clone(),
                    delimiter: DELIMITER,
                });
            }
        }

        let overwritten = self.exists();
        if overwritten {
            warn!("Store {} already exists and will be overwritten", self.path.display());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        for record in records {
            write_record(&mut writer, record)?;
        }
        writer.flush()?;

        info!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(overwritten)
    }

    /// Reads every record in file order.
    pub fn load(&self) -> Result<Vec<Record>, PickerError> {
        self.read_lines()?
            .iter()
            .enumerate()
            .map(|(index, text)| parse_record(text, index + 1))
            .collect()
    }

    /// Picks one line uniformly at random and decodes it.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Result<Record, PickerError> {
        let lines = self.read_lines()?;
        if lines.is_empty() {
            return Err(PickerError::EmptyStore(self.path.clone()));
        }

        let index = rng.random_range(0..lines.len());
        debug!("Picked line {} of {}", index + 1, lines.len());
        parse_record(&lines[index], index + 1)
    }

    fn read_lines(&self) -> Result<Vec<String>, PickerError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                debug!("Cannot open {}: {}", self.path.display(), e);
                return Err(PickerError::StoreNotFound(self.path.clone()));
            }
        };

        let lines = BufReader::new(file).lines().collect::<io::Result<Vec<String>>>()?;
        Ok(lines)
    }
}

fn write_record<W: Write>(mut w: W, record: &Record) -> io::Result<()> {
    writeln!(w, "{}", record.fields().join(DELIMITER.to_string().as_str()))
}

/// `line` is 1-based and only used for the error.
fn parse_record(text: &str, line: usize) -> Result<Record, PickerError> {
    let fields: Vec<String> = text.split(DELIMITER).map(String::from).collect();
    let count = fields.len();
    let row: TableRow = fields
        .try_into()
        .map_err(|_| PickerError::MalformedLine { line, fields: count })?;
    Ok(Record::from_row(row))
}
