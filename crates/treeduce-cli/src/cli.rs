use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use treeduce_lib::{HddVariant, HddrOrder, PhasePreset};

#[derive(Parser)]
#[command(name = "treeduce", bin_name = "treeduce")]
#[command(about = "Hierarchical delta debugging reducer for structured test cases")]
pub struct Cli {
    /// Log filter (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reduce a failing test case while an oracle command keeps failing
    #[command(after_help = r#"EXAMPLES:
  treeduce reduce crash.json --test ./still-crashes.sh
  treeduce reduce crash.c --test ./check -o out --phase coarse-prune --phase prune+hoist
  treeduce reduce crash.json --builder json --tree crash.tree.json --test ./check"#)]
    Reduce {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        reduce: ReduceArgs,
    },

    /// Build the HDD tree for an input and print it as JSON
    Tree {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List compiled-in grammars
    Langs,
}

/// How the input is turned into a tree.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum Builder {
    /// Parse the input with a compiled-in tree-sitter grammar
    #[default]
    Sitter,
    /// Load a prebuilt tree document produced by an external tool
    Json,
}

#[derive(Args)]
pub struct InputArgs {
    /// Input file to reduce
    pub input: PathBuf,

    /// Tree builder to use
    #[arg(long, value_enum, default_value = "sitter")]
    pub builder: Builder,

    /// Language of the input (inferred from the extension otherwise)
    #[arg(long, short = 'l', value_name = "LANG")]
    pub lang: Option<String>,

    /// JSON file mapping node kinds to replacement strings
    #[arg(long, short = 'r', value_name = "FILE")]
    pub replacements: Option<PathBuf>,

    /// Prebuilt tree document (required by the json builder)
    #[arg(long, value_name = "FILE")]
    pub tree: Option<PathBuf>,

    /// Build hidden tokens (comments and friends) into the tree; implies
    /// unparsing without whitespace synthesis
    #[arg(long)]
    pub build_hidden_tokens: bool,
}

/// Named HDD variants.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum HddChoice {
    /// Level-based reduction
    #[default]
    Hdd,
    /// Recursive (per-node) reduction
    Hddr,
}

/// Traversal orders of the recursive variant.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OrderChoice {
    Bfs,
    BfsReverse,
    Dfs,
    #[default]
    DfsReverse,
}

impl OrderChoice {
    fn order(self) -> HddrOrder {
        match self {
            OrderChoice::Bfs => HddrOrder::Bfs,
            OrderChoice::BfsReverse => HddrOrder::BfsReverse,
            OrderChoice::Dfs => HddrOrder::Dfs,
            OrderChoice::DfsReverse => HddrOrder::DfsReverse,
        }
    }
}

/// Named phase presets.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PhaseChoice {
    #[value(name = "prune")]
    Prune,
    #[value(name = "coarse-prune")]
    CoarsePrune,
    #[value(name = "hoist")]
    Hoist,
    #[value(name = "prune+hoist")]
    PruneHoist,
    #[value(name = "coarse-prune+hoist")]
    CoarsePruneHoist,
}

impl PhaseChoice {
    pub fn preset(self) -> PhasePreset {
        match self {
            PhaseChoice::Prune => PhasePreset::Prune,
            PhaseChoice::CoarsePrune => PhasePreset::CoarsePrune,
            PhaseChoice::Hoist => PhasePreset::Hoist,
            PhaseChoice::PruneHoist => PhasePreset::PruneHoist,
            PhaseChoice::CoarsePruneHoist => PhasePreset::CoarsePruneHoist,
        }
    }
}

#[derive(Args)]
pub struct ReduceArgs {
    /// Oracle command, invoked with the candidate path as its only
    /// argument; exit code 0 means the candidate is still interesting
    #[arg(long, short = 't', value_name = "CMD")]
    pub test: String,

    /// Output directory
    #[arg(long, short = 'o', value_name = "DIR", default_value = "treeduce-out")]
    pub out: PathBuf,

    /// HDD variant to run
    #[arg(long, value_enum, default_value = "hdd")]
    pub hdd: HddChoice,

    /// Traversal order of the recursive variant
    #[arg(long, value_enum, default_value = "dfs-reverse")]
    pub hddr_order: OrderChoice,

    /// Phase parametrization (may be given multiple times to run several
    /// parametrizations in sequence; default: prune)
    #[arg(long, value_enum, value_name = "NAME")]
    pub phase: Vec<PhaseChoice>,

    /// Run each phase only once instead of iterating to a fixpoint
    #[arg(long)]
    pub no_hdd_star: bool,

    /// Flatten recurring blocks of left/right-recursive rules
    #[arg(long)]
    pub flatten_recursion: bool,

    /// Don't squeeze rule chains in the tree representation
    #[arg(long)]
    pub no_squeeze_tree: bool,

    /// Don't hide unremovable nodes from the reducer
    #[arg(long)]
    pub no_skip_unremovable: bool,

    /// Hide whitespace tokens from the reducer
    #[arg(long)]
    pub skip_whitespace: bool,

    /// Don't cache oracle outcomes
    #[arg(long)]
    pub no_cache: bool,

    /// Remove intermediate candidate files on success
    #[arg(long)]
    pub cleanup: bool,
}

impl ReduceArgs {
    pub fn variant(&self) -> HddVariant {
        match self.hdd {
            HddChoice::Hdd => HddVariant::Hdd,
            HddChoice::Hddr => HddVariant::Hddr(self.hddr_order.order()),
        }
    }
}
