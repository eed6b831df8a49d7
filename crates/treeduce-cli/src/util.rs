use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process::exit;

use treeduce_core::Tree;
use treeduce_langs::Lang;
use treeduce_lib::build::{json, sitter};

use crate::cli::{Builder, InputArgs};

pub fn read_to_string(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("error: cannot read {}: {err}", path.display());
        exit(1);
    })
}

pub fn resolve_lang(lang: &Option<String>, input: &Path) -> Lang {
    if let Some(name) = lang {
        return treeduce_langs::from_name(name).unwrap_or_else(|| {
            eprintln!("error: unknown language: {name}");
            exit(1);
        });
    }

    if let Some(ext) = input.extension().and_then(|ext| ext.to_str()) {
        return treeduce_langs::from_ext(ext).unwrap_or_else(|| {
            eprintln!("error: cannot infer language from extension '.{ext}', use --lang");
            exit(1);
        });
    }

    eprintln!("error: --lang is required (cannot infer from input)");
    exit(1);
}

fn load_replacements(path: &Path) -> HashMap<String, String> {
    serde_json::from_str(&read_to_string(path)).unwrap_or_else(|err| {
        eprintln!(
            "error: invalid replacements file {}: {err}",
            path.display()
        );
        exit(1);
    })
}

/// Build the HDD tree for the selected builder. Returns the tree and
/// whether unparsing should synthesize whitespace.
pub fn build_tree(args: &InputArgs) -> (Tree, bool) {
    let with_whitespace = !args.build_hidden_tokens;
    let tree = match args.builder {
        Builder::Sitter => {
            let lang = resolve_lang(&args.lang, &args.input);
            let source = read_to_string(&args.input);
            let options = sitter::BuildOptions {
                replacements: args
                    .replacements
                    .as_deref()
                    .map(load_replacements)
                    .unwrap_or_default(),
                build_hidden_tokens: args.build_hidden_tokens,
            };
            sitter::from_source(&lang, &source, &options)
        }
        Builder::Json => {
            let Some(tree_path) = &args.tree else {
                eprintln!("error: the json builder needs --tree");
                exit(1);
            };
            json::from_json(&read_to_string(tree_path))
        }
    };
    let tree = tree.unwrap_or_else(|err| {
        eprintln!("error: building tree: {err}");
        exit(1);
    });
    (tree, with_whitespace)
}
