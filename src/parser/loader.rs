//! Baseline table loading

use std::io::Read;

use csv::StringRecord;
use log::{debug, warn};

use crate::config::Config;
use crate::error::LoadError;
use crate::model::{Row, Table};

use super::{delimited_reader, read_header};

/// Reads a whole baseline file into an indexed [`Table`]
pub struct TableLoader {
    config: Config,
}

impl TableLoader {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load every record of `reader`, preserving file order
    pub fn load<R: Read>(&self, reader: R) -> Result<Table, LoadError> {
        let mut reader = delimited_reader(&self.config, reader);

        let header = if self.config.has_header() {
            let header = read_header(&mut reader)
                .map_err(|e| LoadError::from_csv(e, 0))?
                .ok_or(LoadError::HeaderMissing)?;
            Some(header)
        } else {
            None
        };

        let id_column = self.config.id_column();
        let mut table = Table::new(header, id_column);
        let mut record = StringRecord::new();

        loop {
            let row_number = table.row_count() + 1;
            let more = reader
                .read_record(&mut record)
                .map_err(|e| LoadError::from_csv(e, row_number))?;
            if !more {
                break;
            }

            let id = id_column
                .extract(&record)
                .ok_or(LoadError::IdFieldOutOfRange {
                    row: row_number,
                    width: record.len(),
                    column: id_column.number(),
                })?
                .to_string();

            if let Some(previous) = table.push_row(&id, Row::new(record.clone())) {
                warn!(
                    "Duplicate ID {:?} in baseline records #{} and #{}; only #{} is compared",
                    id,
                    previous + 1,
                    row_number,
                    row_number
                );
            }
        }

        debug!(
            "Loaded {} baseline records ({} distinct IDs)",
            table.row_count(),
            table.id_count()
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Yields `data` on the first read, then fails
    struct FailingReader {
        data: &'static [u8],
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "disk gone"));
            }
            self.served = true;
            let n = self.data.len().min(buf.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            Ok(n)
        }
    }

    fn load(config: Config, input: &str) -> Result<Table, LoadError> {
        TableLoader::new(config).load(input.as_bytes())
    }

    #[test]
    fn test_load_with_header() {
        let config = Config::new('|', 1).unwrap();
        let table = load(config, "id|name|age\n1|Alice|30\n2|Bob|40\n").unwrap();

        let header = table.header().unwrap();
        assert_eq!(header.name(1), Some("name"));
        assert_eq!(header.position("age"), Some(2));
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row_index("2"), Some(1));
        assert_eq!(table.rows()[0].get(2), Some("30"));
    }

    #[test]
    fn test_load_without_header() {
        let config = Config::new(',', 2).unwrap().with_header(false);
        let table = load(config, "x,10\ny,20\n").unwrap();

        assert!(table.header().is_none());
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row_index("10"), Some(0));
        assert_eq!(table.row_index("20"), Some(1));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let table = load(Config::default(), "id|name\n").unwrap();
        assert_eq!(table.row_count(), 0);
        assert!(table.header().is_some());
    }

    #[test]
    fn test_empty_file_missing_header() {
        let err = load(Config::default(), "").unwrap_err();
        assert!(matches!(err, LoadError::HeaderMissing));
    }

    #[test]
    fn test_row_too_narrow_for_id() {
        let config = Config::new('|', 3).unwrap();
        let err = load(config, "a|b|c\n1|2|3\n4|5\n").unwrap_err();
        match err {
            LoadError::IdFieldOutOfRange { row, width, column } => {
                assert_eq!(row, 2);
                assert_eq!(width, 2);
                assert_eq!(column, 3);
            }
            other => panic!("Expected IdFieldOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_record() {
        let config = Config::new('|', 1).unwrap();
        let input: &[u8] = b"id|name\n1|ok\n2|\xff\xfe\n";
        let err = TableLoader::new(config).load(input).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { row: 2, .. }));
    }

    #[test]
    fn test_io_failure_is_unreadable() {
        let reader = FailingReader {
            data: b"id|name\n1|ok\n",
            served: false,
        };
        let err = TableLoader::new(Config::new('|', 1).unwrap())
            .load(reader)
            .unwrap_err();
        match err {
            LoadError::FileUnreadable(source) => assert!(source.is_io_error()),
            other => panic!("Expected FileUnreadable, got {:?}", other),
        }
    }

    #[test]
    fn test_rows_of_mixed_width() {
        let config = Config::new('|', 1).unwrap();
        let table = load(config, "id|a|b\n1|x\n2|y|z|w\n").unwrap();
        assert_eq!(table.rows()[0].width(), 2);
        assert_eq!(table.rows()[1].width(), 4);
    }

    #[test]
    fn test_duplicate_ids_keep_all_rows() {
        let config = Config::new('|', 1).unwrap();
        let table = load(config, "id|v\n5|old\n6|x\n5|new\n").unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.id_count(), 2);
        assert_eq!(table.row_index("5"), Some(2));
        assert_eq!(table.rows()[2].get(1), Some("new"));
    }
}
