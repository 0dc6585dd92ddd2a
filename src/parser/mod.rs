//! Reading delimited snapshot files

mod loader;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::StringRecord;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::Header;

pub use self::loader::TableLoader;

/// Build a record reader over `reader` using the configured delimiter.
///
/// Rows may vary in width. The header, if any, is read explicitly with
/// [`read_header`] so that an empty file can be told apart from a file with
/// no data rows.
pub fn delimited_reader<R: Read>(config: &Config, reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(config.delimiter())
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
}

/// Read the first record as a header, `Ok(None)` if the input is empty
pub fn read_header<R: Read>(reader: &mut csv::Reader<R>) -> csv::Result<Option<Header>> {
    let mut record = StringRecord::new();
    if reader.read_record(&mut record)? {
        Ok(Some(Header::from_record(&record)))
    } else {
        Ok(None)
    }
}

/// Open a file for buffered reading
pub fn open_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| Error::file_open(path, e))?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_header() {
        let config = Config::default();
        let mut reader = delimited_reader(&config, "id|name\n1|a\n".as_bytes());
        let header = read_header(&mut reader).unwrap().unwrap();
        assert_eq!(header.name(0), Some("id"));
        assert_eq!(header.name(1), Some("name"));
        assert_eq!(header.name(2), None);

        let mut empty = delimited_reader(&config, "".as_bytes());
        assert!(read_header(&mut empty).unwrap().is_none());
    }

    #[test]
    fn test_flexible_width() {
        let config = Config::new(',', 1).unwrap();
        let mut reader = delimited_reader(&config, "a,b\nc,d,e\nf\n".as_bytes());
        let widths: Vec<usize> = reader.records().map(|r| r.unwrap().len()).collect();
        assert_eq!(widths, vec![2, 3, 1]);
    }

    #[test]
    fn test_open_missing_file() {
        let err = open_file(Path::new("/nonexistent/keydiff/baseline.psv")).unwrap_err();
        assert!(matches!(err, Error::FileOpen { .. }));
    }
}
