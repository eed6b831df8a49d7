//! Dump the built HDD tree as an interchange document.

use std::process::exit;

use treeduce_lib::build::json;

use crate::cli::InputArgs;
use crate::util;

pub fn run(input: InputArgs) {
    let (tree, _) = util::build_tree(&input);
    match json::to_json(&tree) {
        Ok(document) => println!("{document}"),
        Err(err) => {
            eprintln!("error: serializing tree: {err}");
            exit(1);
        }
    }
}
