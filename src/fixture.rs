//! Fixture synthesis: one aggregate type per requested size.

use crate::diagnostics::GenError;

/// Prefix shared by every generated aggregate identity.
pub const AGGREGATE_PREFIX: &str = "test_aggregate_";

/// How a member stores its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// The member owns its value.
    OwnedValue,
    /// The member is a reference to the shared cell keyed by its position.
    SharedAlias,
}

impl MemberKind {
    /// Even positions own their value, odd positions alias shared storage.
    pub fn for_position(position: usize) -> Self {
        if position % 2 == 0 {
            MemberKind::OwnedValue
        } else {
            MemberKind::SharedAlias
        }
    }
}

/// One physical member of an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberSpec {
    /// 1-based position within the aggregate.
    pub position: usize,
    pub kind: MemberKind,
}

impl MemberSpec {
    pub fn new(position: usize) -> Self {
        Self { position, kind: MemberKind::for_position(position) }
    }

    /// Field name in the generated struct (`v<position>`).
    pub fn field_name(&self) -> String {
        format!("v{}", self.position)
    }

    /// Name of the shared cell backing this member (`s_v<position>`).
    pub fn cell_name(&self) -> String {
        shared_cell_name(self.position)
    }

    /// Value the member holds (or its cell is seeded with) on default construction.
    pub fn initial_value(&self) -> i64 {
        self.position as i64
    }

    pub fn is_alias(&self) -> bool {
        self.kind == MemberKind::SharedAlias
    }
}

pub fn shared_cell_name(position: usize) -> String {
    format!("s_v{position}")
}

/// One branch of the indexed accessor: `get<index>()` returns the member at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorBranch {
    pub index: usize,
    pub position: usize,
}

/// Index → member table for one aggregate. Total over `0..size`, nothing beyond.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorSpec {
    pub size: usize,
    pub branches: Vec<AccessorBranch>,
}

impl AccessorSpec {
    fn from_members(members: &[MemberSpec]) -> Self {
        let branches = members
            .iter()
            .map(|m| AccessorBranch { index: m.position - 1, position: m.position })
            .collect();
        Self { size: members.len(), branches }
    }

    /// Position reached by `get<index>()`, or `None` when no branch exists.
    pub fn position_for(&self, index: usize) -> Option<usize> {
        if index >= self.size {
            return None;
        }
        self.branches.get(index).map(|b| b.position)
    }
}

/// A synthesized aggregate type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSpec {
    pub size: usize,
    pub members: Vec<MemberSpec>,
}

impl AggregateSpec {
    /// Build the aggregate for `size`: members at positions `1..=size`, kind chosen by parity.
    ///
    /// The corpus never asks for `size == 0`; such a spec has no members and an
    /// accessor with no branches.
    pub fn synthesize(size: usize) -> Self {
        let members = (1..=size).map(MemberSpec::new).collect();
        let spec = Self { size, members };
        tracing::debug!(
            name = %spec.name(),
            owned = spec.owned_count(),
            aliases = spec.alias_count(),
            "synthesized fixture"
        );
        spec
    }

    pub fn name(&self) -> String {
        aggregate_name(self.size)
    }

    /// Value of the emitted `member_count` constant.
    pub fn member_count(&self) -> usize {
        self.size
    }

    pub fn accessor(&self) -> AccessorSpec {
        AccessorSpec::from_members(&self.members)
    }

    /// Member returned by `get<index>()`.
    pub fn member_at(&self, index: usize) -> Result<&MemberSpec, GenError> {
        self.accessor()
            .position_for(index)
            .and_then(|p| self.members.get(p - 1))
            .ok_or_else(|| GenError::index_out_of_range(self.name(), index, self.size))
    }

    pub fn alias_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_alias()).count()
    }

    pub fn owned_count(&self) -> usize {
        self.members.len() - self.alias_count()
    }
}

/// Identity of the aggregate generated for `size`.
pub fn aggregate_name(size: usize) -> String {
    format!("{AGGREGATE_PREFIX}{size}")
}
