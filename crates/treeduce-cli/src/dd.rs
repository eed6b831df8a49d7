//! Reference minimizing delta debugger.
//!
//! The classic algorithm: split the configuration into n subsets, try to
//! reduce to a failing subset, then to a failing complement, and double the
//! granularity when neither works. Candidates are tried in configuration
//! order, so the result is deterministic, and the final granularity equals
//! the configuration size, which makes the result 1-minimal.

use treeduce_core::NodeId;
use treeduce_lib::{ConfigTest, DeltaDebugger, Outcome, TestId};

pub struct DdMin;

impl DdMin {
    pub fn new() -> Self {
        Self
    }
}

impl DeltaDebugger for DdMin {
    fn ddmin(&self, config: Vec<NodeId>, test: &ConfigTest<'_, NodeId>) -> Vec<NodeId> {
        let mut current = config;
        let mut n = 2usize;

        for run in 0.. {
            if current.len() < 2 {
                break;
            }
            n = n.min(current.len());
            let subsets = split(&current, n);
            let mut next: Option<(Vec<NodeId>, usize)> = None;

            // Reduce to a failing subset.
            for (i, subset) in subsets.iter().enumerate() {
                let id = TestId::segment(format!("r{run}")).child(format!("s{i}"));
                if test.outcome(subset, &id) == Outcome::Fail {
                    next = Some((subset.clone(), 2));
                    break;
                }
            }

            // Reduce to a failing complement. At n = 2 the complements are
            // the subsets again, so there is nothing new to try.
            if next.is_none() && n > 2 {
                for i in 0..subsets.len() {
                    let complement: Vec<NodeId> = subsets
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .flat_map(|(_, subset)| subset.iter().copied())
                        .collect();
                    let id = TestId::segment(format!("r{run}")).child(format!("c{i}"));
                    if test.outcome(&complement, &id) == Outcome::Fail {
                        next = Some((complement, n.saturating_sub(1).max(2)));
                        break;
                    }
                }
            }

            match next {
                Some((reduced, granularity)) => {
                    current = reduced;
                    n = granularity;
                }
                None if n < current.len() => n = (2 * n).min(current.len()),
                None => break,
            }
        }

        current
    }
}

/// Split into n contiguous chunks of (almost) equal size, preserving order.
fn split(config: &[NodeId], n: usize) -> Vec<Vec<NodeId>> {
    let len = config.len();
    let mut subsets = Vec::with_capacity(n);
    let mut taken = 0;
    for i in 0..n {
        let size = len / n + usize::from(i < len % n);
        subsets.push(config[taken..taken + size].to_vec());
        taken += size;
    }
    subsets
}
