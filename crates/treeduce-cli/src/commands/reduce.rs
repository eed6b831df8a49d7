//! The primary command: reduce a failing test case.

use std::fs;
use std::process::exit;

use treeduce_lib::{Cache, PhasePreset, ReduceOptions, reduce};

use crate::cache::ContentCache;
use crate::cli::{InputArgs, ReduceArgs};
use crate::dd::DdMin;
use crate::tester::CommandTester;
use crate::util;

pub fn run(input: InputArgs, args: ReduceArgs) {
    let (mut tree, with_whitespace) = util::build_tree(&input);

    let basename = input
        .input
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_else(|| {
            eprintln!("error: input path has no usable file name");
            exit(1);
        })
        .to_owned();

    let pattern = args
        .out
        .join("tests")
        .join("%s")
        .join(&basename)
        .to_string_lossy()
        .into_owned();
    let tester = CommandTester::new(args.test.clone(), pattern);
    let dd = DdMin::new();
    let cache = ContentCache::default();

    let phases = if args.phase.is_empty() {
        vec![PhasePreset::Prune.config()]
    } else {
        args.phase
            .iter()
            .map(|phase| phase.preset().config())
            .collect()
    };

    let opts = ReduceOptions {
        variant: args.variant(),
        phases,
        hdd_star: !args.no_hdd_star,
        flatten_recursion: args.flatten_recursion,
        squeeze_tree: !args.no_squeeze_tree,
        skip_unremovable: !args.no_skip_unremovable,
        skip_whitespace: args.skip_whitespace,
        with_whitespace,
    };

    let cache_ref: Option<&dyn Cache> = if args.no_cache { None } else { Some(&cache) };
    reduce(&mut tree, &dd, &tester, cache_ref, &opts);

    let reduced = tree.unparse(with_whitespace);
    if let Err(err) = fs::create_dir_all(&args.out) {
        eprintln!("error: cannot create {}: {err}", args.out.display());
        exit(1);
    }
    let out_path = args.out.join(&basename);
    if let Err(err) = fs::write(&out_path, &reduced) {
        eprintln!("error: cannot write {}: {err}", out_path.display());
        exit(1);
    }

    if args.cleanup {
        // Candidate files are expendable; their removal failing is not.
        let _ = fs::remove_dir_all(args.out.join("tests"));
    }

    tracing::info!("Reduced test case saved to {}", out_path.display());
}
