//! Achievement progress evaluation and one-time completion detection.

use crate::collection::{CollectedEntry, CollectionState};
use crate::models::{
    Achievement, AchievementGoal, CollectionGoal, GoalProperty, Requirement, SpecialForms,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub completed: u32,
    pub total: u32,
}

impl Progress {
    /// `0/0` counts as complete.
    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Progress of one achievement against a collection.
pub fn progress(
    achievement: &Achievement,
    state: &CollectionState,
    forms: &SpecialForms,
) -> Progress {
    match &achievement.goal {
        AchievementGoal::RequiredCards(requirements) => card_progress(requirements, state),
        AchievementGoal::Collection(goal) => goal_progress(goal, state, forms),
    }
}

/// Progress of every achievement, keyed by id.
pub fn evaluate<'a, I>(
    achievements: I,
    state: &CollectionState,
    forms: &SpecialForms,
) -> BTreeMap<String, Progress>
where
    I: IntoIterator<Item = &'a Achievement>,
{
    achievements
        .into_iter()
        .map(|a| (a.id.clone(), progress(a, state, forms)))
        .collect()
}

/// Ids whose progress is complete.
pub fn completed_ids(progress: &BTreeMap<String, Progress>) -> BTreeSet<String> {
    progress
        .iter()
        .filter(|(_, p)| p.is_complete())
        .map(|(id, _)| id.clone())
        .collect()
}

fn card_progress(requirements: &[Requirement], state: &CollectionState) -> Progress {
    // Group order does not matter, only the count of satisfied groups.
    let mut groups: BTreeMap<&str, (u32, Vec<&Requirement>)> = BTreeMap::new();
    for req in requirements {
        let group = groups.entry(req.group_key()).or_insert((1, Vec::new()));
        group.0 = group.0.max(req.threshold());
        group.1.push(req);
    }

    let completed = groups
        .values()
        .filter(|(threshold, members)| {
            let owned: u64 = members
                .iter()
                .filter_map(|req| {
                    let entry = state.get(&req.lookup_key())?;
                    shiny_matches(req, entry).then_some(entry.count)
                })
                .fold(0u64, u64::saturating_add);
            owned >= *threshold as u64
        })
        .count();

    Progress {
        completed: completed as u32,
        total: groups.len() as u32,
    }
}

fn shiny_matches(req: &Requirement, entry: &CollectedEntry) -> bool {
    !req.requires_shiny() || entry.is_shiny
}

fn goal_progress(goal: &CollectionGoal, state: &CollectionState, forms: &SpecialForms) -> Progress {
    let value = goal.value.as_deref();
    let counted: u64 = state
        .entries()
        .map(|(_, entry)| entry)
        .filter(|entry| match (goal.property, value) {
            (GoalProperty::Type, Some(v)) => entry.card.has_type(v),
            (GoalProperty::Rarity, Some(v)) => entry.card.rarity.as_str() == v,
            (GoalProperty::IsShiny, _) => entry.is_shiny,
            (GoalProperty::Region, Some(v)) => forms.in_region(&entry.card, v),
            (_, None) => false,
        })
        .map(|entry| entry.count)
        .fold(0u64, u64::saturating_add);

    Progress {
        completed: counted.min(goal.target_count as u64) as u32,
        total: goal.target_count,
    }
}

// ---------------------------------------------------------------------------
// Newly-completed detection
// ---------------------------------------------------------------------------

/// Monotonic set of achievement ids already announced as complete.
///
/// Ids are only ever added; the set is emptied solely by [`reset`](Self::reset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedSet {
    ids: BTreeSet<String>,
}

impl CompletedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I: IntoIterator<Item = String>>(ids: I) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Add every id in `current`.
    pub fn union(&mut self, current: &BTreeSet<String>) {
        self.ids.extend(current.iter().cloned());
    }

    pub fn reset(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> &BTreeSet<String> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Ids complete now that were not complete before.
pub fn newly_completed(previous: &CompletedSet, current: &BTreeSet<String>) -> BTreeSet<String> {
    current
        .iter()
        .filter(|id| !previous.contains(id))
        .cloned()
        .collect()
}

/// Tracks which completions have been announced.
///
/// Holds the in-memory [`CompletedSet`]; persistence is done by the caller
/// through the collection store.
#[derive(Debug, Clone, Default)]
pub struct AchievementTracker {
    seen: CompletedSet,
}

impl AchievementTracker {
    pub fn new(seen: CompletedSet) -> Self {
        Self { seen }
    }

    /// Report ids that became complete since the last call and remember them.
    pub fn detect_newly_completed(&mut self, current: &BTreeSet<String>) -> BTreeSet<String> {
        let fresh = newly_completed(&self.seen, current);
        self.seen.union(current);
        for id in &fresh {
            tracing::info!(achievement = id.as_str(), "achievement completed");
        }
        fresh
    }

    pub fn seen(&self) -> &CompletedSet {
        &self.seen
    }

    pub fn reset(&mut self) {
        self.seen.reset();
    }
}
