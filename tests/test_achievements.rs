mod common;

use common::{card, sample_catalog};
use packdex::achievements::{self, newly_completed};
use packdex::models::{Achievement, AchievementGoal, GoalProperty, Requirement};
use packdex::{AchievementSet, AchievementTracker, CollectionState, CompletedSet, Progress, Rarity};
use std::collections::BTreeSet;

fn owned(keys: &[(&str, bool)]) -> CollectionState {
    let catalog = sample_catalog();
    let mut state = CollectionState::new();
    for (key, shiny) in keys {
        state.add(catalog.get(key).unwrap(), *shiny);
    }
    state
}

fn progress_of(achievement: &Achievement, state: &CollectionState) -> Progress {
    achievements::progress(achievement, state, sample_catalog().special_forms())
}

fn ids(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Card-list achievements
// ---------------------------------------------------------------------------

#[test]
fn each_requirement_is_its_own_group_by_default() {
    let a = Achievement::cards(
        "trio",
        "Trio",
        "",
        vec![
            Requirement::card("Bulbasaur-1"),
            Requirement::card("Mewtwo-150"),
            Requirement::card("Mew-151"),
        ],
    );
    let p = progress_of(&a, &owned(&[("Bulbasaur-1", false), ("Mew-151", false)]));
    assert_eq!(p, Progress { completed: 2, total: 3 });
    assert!(!p.is_complete());
}

#[test]
fn grouped_requirements_share_the_highest_threshold() {
    let a = Achievement::cards(
        "pair",
        "Pair",
        "",
        vec![
            Requirement {
                card_key_base: Some("grp".into()),
                ..Requirement::card("Bulbasaur-1")
            },
            Requirement {
                card_key_base: Some("grp".into()),
                min_count: Some(2),
                ..Requirement::card("Pikachu-25")
            },
        ],
    );

    let one = owned(&[("Bulbasaur-1", false)]);
    assert_eq!(progress_of(&a, &one), Progress { completed: 0, total: 1 });

    let two = owned(&[("Bulbasaur-1", false), ("Bulbasaur-1", false)]);
    assert_eq!(progress_of(&a, &two), Progress { completed: 1, total: 1 });

    let mixed = owned(&[("Bulbasaur-1", false), ("Pikachu-25", false)]);
    assert!(progress_of(&a, &mixed).is_complete());
}

#[test]
fn zero_min_count_means_one() {
    let req = Requirement {
        min_count: Some(0),
        ..Requirement::card("Mew-151")
    };
    assert_eq!(req.threshold(), 1);
    let a = Achievement::cards("mew", "Mew", "", vec![req]);
    assert!(progress_of(&a, &owned(&[("Mew-151", false)])).is_complete());
}

#[test]
fn shiny_requirement_needs_a_shiny_entry() {
    let a = Achievement::cards(
        "shiny-mew",
        "Shiny Mew",
        "",
        vec![Requirement {
            is_shiny: Some(true),
            ..Requirement::card("Mew-151")
        }],
    );
    assert!(!progress_of(&a, &owned(&[("Mew-151", false)])).is_complete());
    assert!(progress_of(&a, &owned(&[("Mew-151", false), ("Mew-151", true)])).is_complete());

    let any = Achievement::cards(
        "any-mew",
        "Any Mew",
        "",
        vec![Requirement {
            is_shiny: Some(false),
            ..Requirement::card("Mew-151")
        }],
    );
    assert!(progress_of(&any, &owned(&[("Mew-151", true)])).is_complete());
}

#[test]
fn variant_requirement_reads_suffixed_key() {
    let req = Requirement::variant("Moltres (Galar)-146", "Galar");
    assert_eq!(req.lookup_key(), "Moltres (Galar)-146-Galar");

    let a = Achievement::cards("galar-bird", "Galar Bird", "", vec![req]);
    assert!(!progress_of(&a, &owned(&[("Moltres-146", false)])).is_complete());
    assert!(progress_of(&a, &owned(&[("Moltres (Galar)-146-Galar", false)])).is_complete());
}

#[test]
fn empty_requirement_list_is_complete() {
    let a = Achievement::cards("none", "None", "", Vec::new());
    let p = progress_of(&a, &CollectionState::new());
    assert_eq!(p, Progress { completed: 0, total: 0 });
    assert!(p.is_complete());
}

// ---------------------------------------------------------------------------
// Collection goals
// ---------------------------------------------------------------------------

#[test]
fn type_goal_counts_copies_and_caps_at_target() {
    let a = Achievement::goal("grass", "Grass", "", GoalProperty::Type, Some("Grass"), 3);
    let state = owned(&[
        ("Bulbasaur-1", false),
        ("Bulbasaur-1", false),
        ("Pikachu-25", false),
    ]);
    assert_eq!(progress_of(&a, &state), Progress { completed: 2, total: 3 });

    let more = owned(&[
        ("Bulbasaur-1", false),
        ("Bulbasaur-1", false),
        ("Chikorita-152", false),
        ("Grookey-810", false),
    ]);
    assert_eq!(progress_of(&a, &more), Progress { completed: 3, total: 3 });
}

#[test]
fn rarity_and_shiny_goals() {
    let state = owned(&[
        ("Mew-151", true),
        ("Mew-151", false),
        ("Mewtwo-150", true),
        ("Bulbasaur-1", false),
    ]);

    let mythical = Achievement::goal("m", "M", "", GoalProperty::Rarity, Some("Mythical"), 10);
    assert_eq!(progress_of(&mythical, &state).completed, 2);

    let shiny = Achievement::goal("s", "S", "", GoalProperty::IsShiny, None, 10);
    assert_eq!(progress_of(&shiny, &state).completed, 3);
}

#[test]
fn goal_without_value_counts_nothing() {
    let a = Achievement::goal("t", "T", "", GoalProperty::Type, None, 1);
    assert_eq!(progress_of(&a, &owned(&[("Bulbasaur-1", false)])).completed, 0);
}

#[test]
fn region_goal_includes_mapped_forms_only() {
    let galar = Achievement::goal("galar", "Galar", "", GoalProperty::Region, Some("Galar"), 10);
    let mut state = owned(&[
        ("Grookey-810", false),
        ("Urshifu (Single Strike)-892-Single", false),
        ("Moltres (Galar)-146-Galar", false),
        ("Moltres-146", false),
    ]);
    state.add(
        &card("Urshifu (Rapid Strike)", 892, Some("Rapid"), &["Fighting"], Rarity::Legendary),
        false,
    );
    assert_eq!(progress_of(&galar, &state).completed, 3);

    let kanto = Achievement::goal("kanto", "Kanto", "", GoalProperty::Region, Some("Kanto"), 10);
    let state = owned(&[
        ("Moltres-146", false),
        ("Mega Charizard X-6-MegaX", false),
        ("Moltres (Galar)-146-Galar", false),
    ]);
    assert_eq!(progress_of(&kanto, &state).completed, 1);
}

#[test]
fn huge_counts_saturate_instead_of_wrapping() {
    let json = r#"{"collectedCards": {
        "Bulbasaur-1": {"count": 18446744073709551615},
        "Chikorita-152": {"count": 5000000000}
    }, "packsOpened": 1}"#;
    let state = CollectionState::from_saved_json(json, &sample_catalog());

    let grass = Achievement::goal("grass", "Grass", "", GoalProperty::Type, Some("Grass"), 100);
    assert_eq!(progress_of(&grass, &state), Progress { completed: 100, total: 100 });

    let pair = Achievement::cards(
        "pair",
        "Pair",
        "",
        vec![
            Requirement {
                card_key_base: Some("grp".into()),
                min_count: Some(3),
                ..Requirement::card("Bulbasaur-1")
            },
            Requirement {
                card_key_base: Some("grp".into()),
                ..Requirement::card("Chikorita-152")
            },
        ],
    );
    assert!(progress_of(&pair, &state).is_complete());
}

#[test]
fn zero_target_goal_is_complete() {
    let a = Achievement::goal("z", "Z", "", GoalProperty::IsShiny, None, 0);
    assert!(progress_of(&a, &CollectionState::new()).is_complete());
}

// ---------------------------------------------------------------------------
// Newly completed
// ---------------------------------------------------------------------------

#[test]
fn newly_completed_is_current_minus_previous() {
    let previous = CompletedSet::from_ids(ids(&["a"]));
    assert_eq!(newly_completed(&previous, &ids(&["a", "b"])), ids(&["b"]));
    assert!(newly_completed(&previous, &ids(&["a"])).is_empty());
}

#[test]
fn tracker_announces_once_and_never_forgets() {
    let mut tracker = AchievementTracker::new(CompletedSet::new());
    assert_eq!(tracker.detect_newly_completed(&ids(&["a", "b"])), ids(&["a", "b"]));
    assert!(tracker.detect_newly_completed(&ids(&["a", "b"])).is_empty());

    assert!(tracker.detect_newly_completed(&ids(&["b"])).is_empty());
    assert!(tracker.seen().contains("a"));

    assert_eq!(tracker.detect_newly_completed(&ids(&["a", "c"])), ids(&["c"]));
    assert_eq!(tracker.seen().len(), 3);

    tracker.reset();
    assert!(tracker.seen().is_empty());
    assert_eq!(tracker.detect_newly_completed(&ids(&["a"])), ids(&["a"]));
}

#[test]
fn evaluate_reports_every_achievement() {
    let set = AchievementSet::new(vec![
        Achievement::cards("mew", "Mew", "", vec![Requirement::card("Mew-151")]),
        Achievement::goal("shiny", "Shiny", "", GoalProperty::IsShiny, None, 1),
    ])
    .unwrap();
    let state = owned(&[("Mew-151", false)]);
    let progress = achievements::evaluate(set.iter(), &state, sample_catalog().special_forms());

    assert_eq!(progress.len(), 2);
    assert_eq!(achievements::completed_ids(&progress), ids(&["mew"]));
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

#[test]
fn standard_set_shape() {
    let set = AchievementSet::standard();
    assert_eq!(set.len(), 27);

    match &set.get("starters").unwrap().goal {
        AchievementGoal::RequiredCards(reqs) => assert_eq!(reqs.len(), 27),
        other => panic!("unexpected goal {:?}", other),
    }
    match &set.get("fire-collector").unwrap().goal {
        AchievementGoal::Collection(goal) => {
            assert_eq!(goal.property, GoalProperty::Type);
            assert_eq!(goal.value.as_deref(), Some("Fire"));
            assert_eq!(goal.target_count, 100);
        }
        other => panic!("unexpected goal {:?}", other),
    }
}

#[test]
fn from_json_parses_both_goal_kinds() {
    let json = r#"[
        {"id": "mew", "name": "Mew", "description": "Catch Mew", "showIcons": true,
         "requiredCards": [{"cardKey": "Mew-151", "isShiny": true, "minCount": 2}]},
        {"id": "shiny", "name": "Shiny",
         "collectionGoal": {"property": "isShiny", "targetCount": 5}}
    ]"#;
    let set = AchievementSet::from_json(json).unwrap();
    assert_eq!(set.len(), 2);

    match &set.get("mew").unwrap().goal {
        AchievementGoal::RequiredCards(reqs) => {
            assert!(reqs[0].requires_shiny());
            assert_eq!(reqs[0].threshold(), 2);
        }
        other => panic!("unexpected goal {:?}", other),
    }
    assert!(!set.get("shiny").unwrap().show_icons);
}

#[test]
fn from_json_rejects_ambiguous_goals() {
    let both = r#"[{"id": "x", "name": "X", "requiredCards": [],
                    "collectionGoal": {"property": "isShiny", "targetCount": 1}}]"#;
    assert!(AchievementSet::from_json(both).is_err());

    let neither = r#"[{"id": "x", "name": "X"}]"#;
    assert!(AchievementSet::from_json(neither).is_err());

    let dup = r#"[{"id": "x", "name": "X", "requiredCards": []},
                  {"id": "x", "name": "Y", "requiredCards": []}]"#;
    assert!(AchievementSet::from_json(dup).is_err());
}
