//! Corpus assembly: every fixture for sizes `1..N`, plus their identities.

use std::collections::BTreeSet;

use crate::fixture::AggregateSpec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    /// Upper bound `N` the corpus was assembled for.
    pub upper_bound: usize,
    /// Aggregates in ascending size order.
    pub aggregates: Vec<AggregateSpec>,
    /// Identities in generation order.
    pub identities: Vec<String>,
}

impl Corpus {
    /// Synthesize one aggregate for each size in `1..upper_bound`.
    pub fn assemble(upper_bound: usize) -> Self {
        let mut aggregates = Vec::with_capacity(upper_bound.saturating_sub(1));
        let mut identities = Vec::with_capacity(upper_bound.saturating_sub(1));
        for size in 1..upper_bound {
            let spec = AggregateSpec::synthesize(size);
            identities.push(spec.name());
            aggregates.push(spec);
        }
        tracing::debug!(upper_bound, fixtures = aggregates.len(), "assembled corpus");
        Self { upper_bound, aggregates, identities }
    }

    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.aggregates.len()
    }

    /// Positions of every shared cell some aggregate aliases, ascending.
    pub fn shared_positions(&self) -> BTreeSet<usize> {
        self.aggregates
            .iter()
            .flat_map(|a| a.members.iter())
            .filter(|m| m.is_alias())
            .map(|m| m.position)
            .collect()
    }

    /// Identities joined for the harness type list, e.g. `test_aggregate_1, test_aggregate_2`.
    pub fn type_list(&self) -> String {
        self.identities.join(", ")
    }
}
