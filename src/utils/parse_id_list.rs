use crate::types::{ItemId, ItemIdList};
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::fs;
use std::io::{Cursor, Read};

/// Parses a comma-separated id list (one or more CSV records) into an
/// [`ItemIdList`].
///
/// Empty fields are skipped; any other field that does not parse as an id
/// fails with [`Error::InvalidArgument`]. The parsed list is returned in
/// input order: sorting is the caller's responsibility, and the counting
/// functions assume it has already happened.
pub fn parse_id_list(raw: &str) -> Result<ItemIdList, Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(ItemIdList::new());
    }

    // Use a cursor to simulate a file reader from the string
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(trimmed));

    let mut ids = ItemIdList::new();

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::InvalidArgument(format!("Failed to read record: {}", e)))?;

        for field in record.iter() {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }

            let id = field.parse::<ItemId>().map_err(|e| {
                Error::InvalidArgument(format!("Invalid item id '{}': {}", field, e))
            })?;
            ids.push(id);
        }
    }

    Ok(ids)
}

/// Reads an id list from a file, decompressing first when the path ends in
/// `.gz`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decompressed
/// ([`Error::ResourceExhaustion`]) or if its contents do not parse as an id
/// list ([`Error::InvalidArgument`]).
pub fn read_id_list_from_file(file_path: &str) -> Result<ItemIdList, Error> {
    let raw_bytes = fs::read(file_path)?;

    let contents = if file_path.ends_with(".gz") {
        // Decompress the Gzip file
        let mut decoder = GzDecoder::new(raw_bytes.as_slice());
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;
        decompressed_data
    } else {
        String::from_utf8(raw_bytes)
            .map_err(|e| Error::InvalidArgument(format!("Input file is not valid UTF-8: {}", e)))?
    };

    parse_id_list(&contents)
}
