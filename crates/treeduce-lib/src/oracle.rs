//! The oracle interface: deciding whether a candidate is still interesting.

use std::fmt;

/// Verdict of the oracle on one candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The candidate still reproduces the failure; reduction keeps it.
    Fail,
    /// The candidate lost the property being preserved.
    Pass,
}

/// Hierarchical identifier of a single candidate evaluation.
///
/// Segments accumulate along the run (phase, iteration, level/node,
/// transformation, then the reducer's own ids); the `/`-joined rendering
/// doubles as a workspace-relative path, so concurrent evaluations never
/// collide on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestId {
    segments: Vec<String>,
}

impl TestId {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-segment id.
    pub fn segment(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![segment.into()],
        }
    }

    /// This id extended by one segment.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// This id extended by all segments of `other`.
    pub fn join(&self, other: &TestId) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// Decides whether a candidate is still interesting.
///
/// Implementations may be called from several reducer workers at once; an
/// evaluation that can neither pass nor fail cleanly (tester crash, I/O
/// error) must be reported as [`Outcome::Pass`] so the reduction can go on.
pub trait Oracle: Sync {
    fn test(&self, candidate: &str, id: &TestId) -> Outcome;
}

/// Oracle backed by a plain function, for embedding and tests.
pub struct FnOracle<F>(F);

impl<F> FnOracle<F>
where
    F: Fn(&str) -> Outcome + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Oracle for FnOracle<F>
where
    F: Fn(&str) -> Outcome + Sync,
{
    fn test(&self, candidate: &str, _id: &TestId) -> Outcome {
        (self.0)(candidate)
    }
}
