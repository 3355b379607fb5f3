use collection_similarity::{
    count_symmetric_difference, parse_id_list, read_id_list_from_file, similarity_from_diff_count,
    Error, ItemIdList, SortedSequence,
};
use log::error;
use std::env;
use std::io::{self, Read};

fn main() {
    // Initialize the logger
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let (list_a, list_b) = match load_input_lists(&args) {
        Ok(lists) => lists,
        Err(e) => {
            error!("Failed to load input id lists: {}", e);
            std::process::exit(1);
        }
    };

    match count_symmetric_difference(SortedSequence::Ids(&list_a), SortedSequence::Ids(&list_b)) {
        Ok(diff_count) => {
            println!("diff_count: {}", diff_count);
            println!("similarity: {:.4}", similarity_from_diff_count(diff_count));
        }
        Err(e) => {
            error!("Error counting symmetric difference: {}", e);
            std::process::exit(1);
        }
    }
}

/// With no arguments, reads two id-list lines from stdin; with exactly two
/// arguments, treats them as file paths (`.gz` files are decompressed).
/// Lists must be pre-sorted ascending; this tool does not sort for you.
fn load_input_lists(args: &[String]) -> Result<(ItemIdList, ItemIdList), Error> {
    match args {
        [] => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;

            let mut lines = input.lines().filter(|line| !line.trim().is_empty());
            let line_a = lines.next().ok_or_else(|| {
                Error::InvalidArgument("expected two id-list lines on stdin, got none".to_string())
            })?;
            let line_b = lines.next().ok_or_else(|| {
                Error::InvalidArgument("expected two id-list lines on stdin, got one".to_string())
            })?;
            if lines.next().is_some() {
                return Err(Error::InvalidArgument(
                    "expected exactly two id-list lines on stdin, got more".to_string(),
                ));
            }

            Ok((parse_id_list(line_a)?, parse_id_list(line_b)?))
        }
        [path_a, path_b] => Ok((
            read_id_list_from_file(path_a)?,
            read_id_list_from_file(path_b)?,
        )),
        _ => Err(Error::InvalidArgument(format!(
            "expected no arguments (stdin mode) or two file paths, got {} arguments",
            args.len()
        ))),
    }
}
