use crate::filter::{FilterDescriptor, FlagParseError, parse_event_flag};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Id of the implicit policy built from `--events` flags
pub const DEFAULT_POLICY_ID: u32 = 0;

/// Pre-parsed event flags of one policy, in the order they were given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PolicyFilterSet {
    pub id: u32,
    pub name: String,
    pub descriptors: Vec<FilterDescriptor>,
}

impl PolicyFilterSet {
    pub fn new(id: u32, name: impl Into<String>, descriptors: Vec<FilterDescriptor>) -> Self {
        Self {
            id,
            name: name.into(),
            descriptors,
        }
    }

    /// Descriptors selecting events (no exclusion)
    pub fn selected(&self) -> impl Iterator<Item = &FilterDescriptor> {
        self.descriptors.iter().filter(|d| !d.is_unset())
    }

    /// Descriptors excluding events
    pub fn excluded(&self) -> impl Iterator<Item = &FilterDescriptor> {
        self.descriptors.iter().filter(|d| d.is_unset())
    }
}

/// Maps policy id to its pre-parsed event flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PolicyFilterMap(BTreeMap<u32, PolicyFilterSet>);

impl PolicyFilterMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a policy, replacing any policy with the same id
    pub fn insert(&mut self, policy: PolicyFilterSet) -> Option<PolicyFilterSet> {
        self.0.insert(policy.id, policy)
    }

    pub fn get(&self, id: u32) -> Option<&PolicyFilterSet> {
        self.0.get(&id)
    }

    pub fn default_policy(&self) -> Option<&PolicyFilterSet> {
        self.get(DEFAULT_POLICY_ID)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PolicyFilterSet> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of descriptors across all policies
    pub fn descriptor_count(&self) -> usize {
        self.iter().map(|p| p.descriptors.len()).sum()
    }
}

/// Parse all `--events` flags into a map holding the default policy.
///
/// Flags are parsed in order and the first invalid flag aborts parsing;
/// no partial map is returned.
pub fn prepare_event_map_from_flags<S: AsRef<str>>(
    flags: &[S],
) -> Result<PolicyFilterMap, FlagParseError> {
    let mut descriptors = Vec::new();

    for flag in flags {
        let flag = flag.as_ref();
        let mut parsed = parse_event_flag(flag)?;
        trace!(flag, count = parsed.len(), "parsed event flag");
        descriptors.append(&mut parsed);
    }

    debug!(
        flags = flags.len(),
        descriptors = descriptors.len(),
        "prepared event map"
    );

    let mut map = PolicyFilterMap::new();
    map.insert(PolicyFilterSet::new(DEFAULT_POLICY_ID, "", descriptors));
    Ok(map)
}
