use collection_similarity::{parse_id_list, ItemIdList};
use csv::Reader;
use std::collections::HashMap;
use std::error::Error;

/// Utility to load labeled id lists from a CSV file for testing and benchmarking.
///
/// The fixture is expected to have a `Label` column and an `Item IDs` column
/// holding a comma-separated, ascending-sorted id list.
pub fn load_id_lists_from_file(file_path: &str) -> Result<HashMap<String, ItemIdList>, Box<dyn Error>> {
    let mut id_lists = HashMap::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() == 2 {
            let label = record.get(0).unwrap().to_string();
            let ids = parse_id_list(record.get(1).unwrap())?;
            id_lists.insert(label, ids);
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(id_lists)
}
