mod common;

use common::{card, sample_catalog};
use packdex::models::{PackFilter, RarityWeights, SpecialForms};
use packdex::{Pack, PackSet, PackdexError, Rarity};

fn eligible_keys(pack: &Pack) -> Vec<String> {
    let catalog = sample_catalog();
    catalog
        .cards()
        .iter()
        .filter(|c| pack.is_eligible(c, catalog.special_forms()))
        .map(|c| c.key())
        .collect()
}

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

#[test]
fn default_weights() {
    let w = RarityWeights::default();
    assert_eq!(w.weight(Rarity::Common), 40);
    assert_eq!(w.weight(Rarity::Uncommon), 25);
    assert_eq!(w.weight(Rarity::Rare), 15);
    assert_eq!(w.weight(Rarity::Epic), 10);
    assert_eq!(w.weight(Rarity::Legendary), 7);
    assert_eq!(w.weight(Rarity::Mythical), 3);
    assert_eq!(w.total(), 100);
}

#[test]
fn pack_without_override_uses_default_weights() {
    let pack = Pack::new("all", "All", PackFilter::Everything);
    assert_eq!(pack.effective_weights(), RarityWeights::default());
}

#[test]
fn partial_weight_override_keeps_other_defaults() {
    let json = r#"{"id": "x", "name": "X", "filter": {"kind": "everything"},
                   "weights": {"Common": 100, "Mythical": 0}}"#;
    let pack: Pack = serde_json::from_str(json).unwrap();
    let w = pack.effective_weights();
    assert_eq!(w.common, 100);
    assert_eq!(w.mythical, 0);
    assert_eq!(w.uncommon, 25);
    assert_eq!(w.legendary, 7);
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[test]
fn kanto_base_pack_skips_variants() {
    let packs = PackSet::standard();
    let keys = eligible_keys(packs.get("151").unwrap());
    assert_eq!(
        keys,
        vec![
            "Bulbasaur-1",
            "Pikachu-25",
            "Gengar-94",
            "Dragonite-149",
            "Mewtwo-150",
            "Mew-151",
            "Moltres-146",
        ]
    );
}

#[test]
fn galar_pack_takes_mapped_forms_inside_range_only() {
    let packs = PackSet::standard();
    let keys = eligible_keys(packs.get("galar").unwrap());
    assert_eq!(keys, vec!["Grookey-810", "Urshifu (Single Strike)-892-Single"]);
}

#[test]
fn unmapped_variant_inside_range_is_not_regional() {
    let forms = SpecialForms::new();
    let filter = PackFilter::regional("Galar", &["Galar"]);
    let unmapped = card(
        "Urshifu (Rapid Strike)",
        892,
        Some("Rapid"),
        &["Fighting"],
        Rarity::Legendary,
    );
    let base = card("Urshifu", 892, None, &["Fighting"], Rarity::Legendary);
    assert!(!filter.matches(&unmapped, &forms));
    assert!(filter.matches(&base, &forms));
}

#[test]
fn unknown_region_matches_nothing() {
    let catalog = sample_catalog();
    let filter = PackFilter::region("Orre");
    assert!(catalog
        .cards()
        .iter()
        .all(|c| !filter.matches(c, catalog.special_forms())));
}

#[test]
fn curated_filter_restricts_listed_numbers() {
    let forms = SpecialForms::new();
    let filter = PackFilter::curated(&[1, 6, 25], &[6], &[25], &["Cap"]);

    let bulbasaur = card("Bulbasaur", 1, None, &["Grass"], Rarity::Common);
    let mega = card("Mega Charizard X", 6, Some("MegaX"), &["Fire"], Rarity::Epic);
    let charizard = card("Charizard", 6, None, &["Fire"], Rarity::Rare);
    let pikachu = card("Pikachu", 25, None, &["Electric"], Rarity::Uncommon);
    let cap = card("Pikachu (Cap)", 25, Some("Cap"), &["Electric"], Rarity::Rare);
    let mew = card("Mew", 151, None, &["Psychic"], Rarity::Mythical);

    assert!(filter.matches(&bulbasaur, &forms));
    assert!(filter.matches(&charizard, &forms));
    assert!(!filter.matches(&mega, &forms));
    assert!(!filter.matches(&pikachu, &forms));
    assert!(filter.matches(&cap, &forms));
    assert!(!filter.matches(&mew, &forms));
}

#[test]
fn snap_pack_drops_gigantamax_and_mega_forms() {
    let forms = SpecialForms::new();
    let snap = PackSet::standard().get("snap").unwrap().clone();

    let machamp = card("Machamp", 68, None, &["Fighting"], Rarity::Rare);
    let gmax = card("GMax Machamp", 68, Some("GMax"), &["Fighting"], Rarity::Epic);
    let lumina = card("Xerneas (Lumina)", 716, Some("lumina"), &["Fairy"], Rarity::Legendary);
    let xerneas = card("Xerneas", 716, None, &["Fairy"], Rarity::Legendary);
    let mega = card("Mega Venusaur", 3, Some("Mega"), &["Grass"], Rarity::Epic);

    assert!(snap.is_eligible(&machamp, &forms));
    assert!(!snap.is_eligible(&gmax, &forms));
    assert!(snap.is_eligible(&lumina, &forms));
    assert!(!snap.is_eligible(&xerneas, &forms));
    assert!(!snap.is_eligible(&mega, &forms));
}

#[test]
fn pokken_pack_needs_an_allowed_variant_everywhere() {
    let forms = SpecialForms::new();
    let pokken = PackSet::standard().get("pokken").unwrap().clone();

    let pikachu = card("Pikachu", 25, None, &["Electric"], Rarity::Uncommon);
    let libre = card("Pikachu Libre", 25, Some("libre"), &["Electric"], Rarity::Rare);
    let alolan = card("Pikachu (Alola)", 25, Some("Alola"), &["Electric"], Rarity::Rare);
    let mega = card("Mega Lucario", 448, Some("Mega"), &["Fighting"], Rarity::Epic);
    let gmax = card("GMax Machamp", 68, Some("GMax"), &["Fighting"], Rarity::Epic);
    let ninetales = card("Ninetales", 38, None, &["Fire"], Rarity::Rare);
    let alolan_ninetales = card("Ninetales (Alola)", 38, Some("Alola"), &["Ice"], Rarity::Rare);

    assert!(pokken.is_eligible(&pikachu, &forms));
    assert!(pokken.is_eligible(&libre, &forms));
    assert!(!pokken.is_eligible(&alolan, &forms));
    assert!(pokken.is_eligible(&mega, &forms));
    assert!(!pokken.is_eligible(&gmax, &forms));
    assert!(pokken.is_eligible(&ninetales, &forms));
    assert!(!pokken.is_eligible(&alolan_ninetales, &forms));
}

#[test]
fn unite_and_urshifu_curated_lists() {
    let forms = SpecialForms::new();
    let packs = PackSet::standard();
    let unite = packs.get("unite").unwrap();
    let urshifu = packs.get("urshifu").unwrap();

    let tauros = card("Tauros", 128, None, &["Normal"], Rarity::Uncommon);
    let combat = card("Tauros (Combat)", 128, Some("Combat"), &["Fighting"], Rarity::Rare);
    let raichu = card("Raichu", 26, None, &["Electric"], Rarity::Uncommon);
    let alolan_raichu = card("Raichu (Alola)", 26, Some("Alola"), &["Electric"], Rarity::Rare);
    assert!(unite.is_eligible(&tauros, &forms));
    assert!(unite.is_eligible(&combat, &forms));
    assert!(!unite.is_eligible(&raichu, &forms));
    assert!(unite.is_eligible(&alolan_raichu, &forms));

    let farfetchd = card("Farfetch'd", 83, None, &["Normal"], Rarity::Common);
    let galarian = card("Farfetch'd (Galar)", 83, Some("Galar"), &["Fighting"], Rarity::Rare);
    let single = card("Urshifu (Single Strike)", 892, Some("Single"), &["Dark"], Rarity::Legendary);
    let mew = card("Mew", 151, None, &["Psychic"], Rarity::Mythical);
    assert!(!urshifu.is_eligible(&farfetchd, &forms));
    assert!(urshifu.is_eligible(&galarian, &forms));
    assert!(urshifu.is_eligible(&single, &forms));
    assert!(!urshifu.is_eligible(&mew, &forms));
}

#[test]
fn type_and_rarity_filters() {
    let forms = SpecialForms::new();
    let gengar = card("Gengar", 94, None, &["Ghost", "Poison"], Rarity::Rare);
    assert!(PackFilter::HasType { value: "Poison".into() }.matches(&gengar, &forms));
    assert!(!PackFilter::HasType { value: "Fire".into() }.matches(&gengar, &forms));
    assert!(PackFilter::HasRarity { rarity: Rarity::Rare }.matches(&gengar, &forms));
    assert!(PackFilter::not(PackFilter::BaseForm).matches(
        &card("Moltres (Galar)", 146, Some("Galar"), &["Dark"], Rarity::Legendary),
        &forms
    ));
}

#[test]
fn filter_json_uses_kind_tag() {
    let json = r#"{"kind": "all", "filters": [
        {"kind": "numberRange", "start": 1, "end": 151},
        {"kind": "not", "filter": {"kind": "variantIn", "variants": ["MegaX"]}}
    ]}"#;
    let filter: PackFilter = serde_json::from_str(json).unwrap();
    assert_eq!(
        filter,
        PackFilter::All {
            filters: vec![
                PackFilter::NumberRange { start: 1, end: 151 },
                PackFilter::not(PackFilter::variants(&["MegaX"])),
            ],
        }
    );
}

// ---------------------------------------------------------------------------
// PackSet
// ---------------------------------------------------------------------------

#[test]
fn standard_lineup() {
    let packs = PackSet::standard();
    assert_eq!(
        packs.ids(),
        vec![
            "mystery", "151", "johto", "hoenn", "sinnoh", "unova", "kalos", "alola", "galar",
            "paldea", "conquest", "unite", "snap", "fossil", "urshifu", "pokken",
        ]
    );
    assert_eq!(packs.get("urshifu").unwrap().name, "Might & Mastery");
    assert_eq!(packs.get("unite").unwrap().carousel_cards.len(), 6);
    assert!(packs.get("unite").unwrap().chase_card.is_none());
    assert_eq!(
        packs.get("snap").unwrap().chase_card.as_deref(),
        Some("Xerneas (Lumina)-716")
    );
    assert!(packs.get("conquest").unwrap().shiny_chase);
    assert_eq!(packs.get("151").unwrap().chase_card.as_deref(), Some("Mew-151"));
}

#[test]
fn unknown_id_resolves_to_mystery() {
    let packs = PackSet::standard();
    assert_eq!(packs.resolve("does-not-exist").id, "mystery");
    assert_eq!(packs.resolve("johto").id, "johto");
}

#[test]
fn custom_set_without_mystery_falls_back_to_first() {
    let packs = PackSet::new(vec![
        Pack::new("a", "A", PackFilter::Everything),
        Pack::new("b", "B", PackFilter::BaseForm),
    ])
    .unwrap();
    assert_eq!(packs.resolve("zzz").id, "a");
}

#[test]
fn new_rejects_empty_and_duplicate_sets() {
    assert!(matches!(PackSet::new(Vec::new()), Err(PackdexError::InvalidArgument(_))));
    let dup = PackSet::new(vec![
        Pack::new("a", "A", PackFilter::Everything),
        Pack::new("a", "Again", PackFilter::BaseForm),
    ]);
    assert!(matches!(dup, Err(PackdexError::InvalidArgument(_))));
}

#[test]
fn from_json_parses_pack_list() {
    let json = r#"[
        {"id": "legends", "name": "Legends", "filter": {"kind": "hasRarity", "rarity": "Legendary"},
         "carouselCards": ["Mewtwo-150"], "chaseCard": "Mewtwo-150"}
    ]"#;
    let packs = PackSet::from_json(json).unwrap();
    let pack = packs.get("legends").unwrap();
    assert_eq!(pack.carousel_cards, vec!["Mewtwo-150"]);
    assert!(!pack.shiny_chase);
    assert_eq!(
        eligible_keys(pack),
        vec![
            "Mewtwo-150",
            "Moltres-146",
            "Moltres (Galar)-146-Galar",
            "Urshifu (Single Strike)-892-Single",
        ]
    );
}

#[test]
fn empty_packs_reports_unreachable_pools() {
    let catalog = common::kanto_trio();
    let zero_common = RarityWeights {
        common: 0,
        ..RarityWeights::default()
    };
    let packs = PackSet::new(vec![
        Pack::new("all", "All", PackFilter::Everything),
        Pack::new("johto", "Johto", PackFilter::region("Johto")),
        Pack::new(
            "commons",
            "Commons",
            PackFilter::HasRarity {
                rarity: Rarity::Common,
            },
        )
        .with_weights(zero_common),
    ])
    .unwrap();

    assert_eq!(
        packs.empty_packs(catalog.cards(), catalog.special_forms()),
        vec!["johto", "commons"]
    );
}
