//! Phase composition: which transformations run, in which driver, and in
//! which order.

use treeduce_core::{NodeId, Tree, info};

use crate::dd::DeltaDebugger;
use crate::filter::{NodeFilter, coarse_filter};
use crate::{Cache, Oracle, TestId, hdd, hddr, hoist, prune, transform};

/// Everything a reduction operator needs besides the tree and the
/// configured nodes.
pub struct ReduceContext<'r, D> {
    pub dd: &'r D,
    pub oracle: &'r dyn Oracle,
    pub cache: Option<&'r dyn Cache>,
    /// Separate nonadjacent nodes by whitespace while unparsing candidates.
    pub with_whitespace: bool,
}

/// A reduction step applied to one configuration of nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transformation {
    Prune,
    Hoist,
}

impl Transformation {
    pub fn apply<D: DeltaDebugger>(
        self,
        tree: &mut Tree,
        config_nodes: &[NodeId],
        ctx: &ReduceContext<'_, D>,
        id_prefix: TestId,
    ) -> bool {
        match self {
            Transformation::Prune => prune::prune(tree, config_nodes, ctx, id_prefix),
            Transformation::Hoist => hoist::hoist(tree, config_nodes, ctx, id_prefix),
        }
    }
}

/// One parametrization of a driver run.
#[derive(Clone, Debug)]
pub struct PhaseConfig {
    pub transformations: Vec<Transformation>,
    pub config_filter: Option<NodeFilter>,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        PhasePreset::Prune.config()
    }
}

/// Named phase presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhasePreset {
    Prune,
    CoarsePrune,
    Hoist,
    PruneHoist,
    CoarsePruneHoist,
}

impl PhasePreset {
    pub fn config(self) -> PhaseConfig {
        let (transformations, config_filter): (Vec<Transformation>, Option<NodeFilter>) = match self
        {
            PhasePreset::Prune => (vec![Transformation::Prune], None),
            PhasePreset::CoarsePrune => (vec![Transformation::Prune], Some(coarse_filter)),
            PhasePreset::Hoist => (vec![Transformation::Hoist], None),
            PhasePreset::PruneHoist => (vec![Transformation::Prune, Transformation::Hoist], None),
            PhasePreset::CoarsePruneHoist => (
                vec![Transformation::Prune, Transformation::Hoist],
                Some(coarse_filter),
            ),
        };
        PhaseConfig {
            transformations,
            config_filter,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PhasePreset::Prune => "prune",
            PhasePreset::CoarsePrune => "coarse-prune",
            PhasePreset::Hoist => "hoist",
            PhasePreset::PruneHoist => "prune+hoist",
            PhasePreset::CoarsePruneHoist => "coarse-prune+hoist",
        }
    }
}

/// Traversal order of the recursive driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HddrOrder {
    Bfs,
    BfsReverse,
    Dfs,
    #[default]
    DfsReverse,
}

impl HddrOrder {
    /// The (pop_first, append_reversed) bits of the queue traversal.
    pub fn bits(self) -> (bool, bool) {
        match self {
            HddrOrder::Bfs => (true, false),
            HddrOrder::BfsReverse => (true, true),
            HddrOrder::Dfs => (false, true),
            HddrOrder::DfsReverse => (false, false),
        }
    }
}

/// Which driver to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HddVariant {
    #[default]
    Hdd,
    Hddr(HddrOrder),
}

/// Settings of a whole reduction session.
#[derive(Clone, Debug)]
pub struct ReduceOptions {
    pub variant: HddVariant,
    /// Phases run in sequence, each re-traversing from the root.
    pub phases: Vec<PhaseConfig>,
    /// Iterate each phase to a fixpoint.
    pub hdd_star: bool,
    pub flatten_recursion: bool,
    pub squeeze_tree: bool,
    pub skip_unremovable: bool,
    pub skip_whitespace: bool,
    pub with_whitespace: bool,
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self {
            variant: HddVariant::Hdd,
            phases: vec![PhaseConfig::default()],
            hdd_star: true,
            flatten_recursion: false,
            squeeze_tree: true,
            skip_unremovable: true,
            skip_whitespace: false,
            with_whitespace: true,
        }
    }
}

/// Run a whole reduction session: tree transformations, then every phase in
/// order. The tree is reduced in place.
pub fn reduce<D: DeltaDebugger>(
    tree: &mut Tree,
    dd: &D,
    oracle: &dyn Oracle,
    cache: Option<&dyn Cache>,
    opts: &ReduceOptions,
) {
    log_tree("Initial tree", tree);

    if opts.flatten_recursion {
        transform::flatten_recursion(tree);
        log_tree("Tree after recursion flattening", tree);
    }
    if opts.squeeze_tree {
        transform::squeeze_tree(tree);
        log_tree("Tree after squeezing", tree);
    }
    if opts.skip_unremovable {
        transform::skip_unremovable(tree, opts.with_whitespace);
        log_tree("Tree after skipping unremovable nodes", tree);
    }
    if opts.skip_whitespace {
        transform::skip_whitespace(tree);
        log_tree("Tree after skipping whitespace tokens", tree);
    }

    let ctx = ReduceContext {
        dd,
        oracle,
        cache,
        with_whitespace: opts.with_whitespace,
    };

    for (phase_cnt, phase) in opts.phases.iter().enumerate() {
        tracing::info!("Phase #{phase_cnt}");
        let id_prefix = TestId::segment(format!("p{phase_cnt}"));
        match opts.variant {
            HddVariant::Hdd => hdd::hddmin(tree, &ctx, &id_prefix, phase, opts.hdd_star),
            HddVariant::Hddr(order) => {
                let (pop_first, append_reversed) = order.bits();
                hddr::hddrmin(
                    tree,
                    &ctx,
                    &id_prefix,
                    phase,
                    opts.hdd_star,
                    pop_first,
                    append_reversed,
                );
            }
        }
        log_tree(&format!("Tree after reduction phase #{phase_cnt}"), tree);
    }
}

fn log_tree(title: &str, tree: &Tree) {
    tracing::debug!(
        "{title}\n\theight: {}\n\tshape: {}\n\tnodes: {}",
        info::height(tree),
        info::shape(tree)
            .iter()
            .map(|cnt| cnt.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        info::count(tree)
            .iter()
            .map(|(kind, cnt)| format!("{cnt} {kind}"))
            .collect::<Vec<_>>()
            .join(", "),
    );
    tracing::trace!("{}", tree.dump());
}
