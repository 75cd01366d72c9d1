//! Player-level walkthroughs of the move builder.
//!
//! Each test drives `MoveBuilder` the way the form does: edit fields, open
//! the tag picker, choose, save, finalize.

use move_core::{
    AttackType, CostAxis, DraftError, Level, MoveBuilder, MoveType, TagType, format_tags,
};

fn level(value: u8) -> Level {
    Level::new(value).expect("level in range")
}

fn add_tag(builder: &mut MoveBuilder, tag_type: TagType, axis: Option<CostAxis>) {
    builder.open_tag_picker().expect("picker opens");
    builder.select_tag_type(tag_type).expect("tag type offered");
    if let Some(axis) = axis {
        builder.select_cost_axis(axis).expect("axis offered");
    }
    builder.save_tag().expect("tag saved");
}

#[test]
fn martial_standard_level_one() {
    let builder = MoveBuilder::new();
    let stats = builder.draft_stats();

    assert_eq!(stats.damage, 3);
    assert_eq!(stats.cooldown, 0);
    assert_eq!(stats.xp, 2);
    assert_eq!(builder.draft().tag_summary(), "");
}

#[test]
fn ranged_standard_level_two_auto_seeds() {
    let mut builder = MoveBuilder::new();
    builder.set_level(level(2));
    builder.set_attack_type(AttackType::Ranged);

    let stats = builder.draft_stats();
    assert_eq!(stats.damage, 4);
    assert_eq!(stats.cooldown, 0);
    assert_eq!(stats.xp, 4);
    assert_eq!(builder.draft().tag_summary(), "Ranged");
    assert!(!builder.eligibility().offers(TagType::Ranged));
}

#[test]
fn finishing_level_three_with_two_tags() {
    let mut builder = MoveBuilder::new();
    builder.set_level(level(3));
    builder.set_move_type(MoveType::Finishing);

    // damage 3 -> 2 after the first tag, still enough for a second
    add_tag(&mut builder, TagType::Aoe, None);
    add_tag(&mut builder, TagType::Immobilize, None);

    let stats = builder.draft_stats();
    assert_eq!(stats.damage, 1);
    assert_eq!(stats.cooldown, 0);
    assert_eq!(stats.xp, 12);
    assert_eq!(builder.draft().tag_summary(), "AOE 1, Immobilize");

    // damage 1 closes the picker for Finishing moves
    assert_eq!(
        builder.open_tag_picker(),
        Err(DraftError::NoTagTypesAvailable)
    );
}

#[test]
fn combo_level_two() {
    let mut builder = MoveBuilder::new();
    builder.set_level(level(2));
    builder.set_move_type(MoveType::Combo);
    add_tag(&mut builder, TagType::Aoe, None);

    let stats = builder.draft_stats();
    assert_eq!(stats.damage, 2);
    assert_eq!(stats.xp, 12);
}

#[test]
fn damage_tag_reevaluated_after_each_addition() {
    let mut builder = MoveBuilder::new();
    builder.set_level(level(3));

    // cooldown 2
    add_tag(&mut builder, TagType::Damage, None);
    let before = builder.draft_stats();
    assert_eq!(before.cooldown, 2);
    assert!(builder.eligibility().offers(TagType::Damage));

    add_tag(&mut builder, TagType::Damage, None);
    let after = builder.draft_stats();
    assert_eq!(after.cooldown, 4);
    assert_eq!(after.damage, before.damage + 2);
    assert!(!builder.eligibility().offers(TagType::Damage));
}

#[test]
fn cooldown_five_never_offers_damage() {
    let mut builder = MoveBuilder::new();
    builder.set_level(level(3));
    add_tag(&mut builder, TagType::Damage, None);
    add_tag(&mut builder, TagType::Damage, None);
    add_tag(&mut builder, TagType::Ranged, Some(CostAxis::Cooldown));

    assert_eq!(builder.draft_stats().cooldown, 5);
    assert!(!builder.eligibility().offers(TagType::Damage));
    assert_eq!(
        builder.select_tag_type(TagType::Damage),
        Err(DraftError::NoPendingTag)
    );
    builder.open_tag_picker().expect("other tags still offered");
    assert_eq!(
        builder.select_tag_type(TagType::Damage),
        Err(DraftError::TagTypeUnavailable(TagType::Damage))
    );
}

#[test]
fn full_standard_build_then_finalize() {
    let mut builder = MoveBuilder::new();
    builder.set_name("Rider Shooting");
    builder.set_level(level(2));
    builder.set_attack_type(AttackType::Ranged);

    add_tag(&mut builder, TagType::Damage, None);
    add_tag(&mut builder, TagType::Aoe, Some(CostAxis::Damage));
    add_tag(&mut builder, TagType::CooldownReduction, None);

    // 1 + 4 - 1 + 2 - 2 - 1
    let stats = builder.draft_stats();
    assert_eq!(stats.damage, 3);
    // 0 + 2 + 0 - 1
    assert_eq!(stats.cooldown, 1);
    assert_eq!(stats.xp, 6);

    let finished = builder.add_move().clone();
    assert_eq!(finished.name, "Rider Shooting");
    assert_eq!(finished.stats(), stats);
    assert_eq!(
        format_tags(&finished.tags),
        "Damage 1, Ranged, AOE 1, Cooldown Reduction 1"
    );

    assert_eq!(builder.moves().len(), 1);
    assert_eq!(builder.draft_stats().damage, 3);
    assert!(builder.draft().tags.is_empty());
}

#[test]
fn finalized_moves_are_unaffected_by_later_edits() {
    let mut builder = MoveBuilder::new();
    builder.set_name("First");
    add_tag(&mut builder, TagType::Immobilize, Some(CostAxis::Damage));
    builder.add_move();

    builder.set_name("Second");
    builder.set_level(level(3));
    add_tag(&mut builder, TagType::Damage, None);

    let first = &builder.moves()[0];
    assert_eq!(first.name, "First");
    assert_eq!(first.level, Level::MIN);
    assert_eq!(first.stats().damage, 0);
    assert_eq!(first.tag_summary(), "Immobilize");
}

#[cfg(feature = "serde")]
#[test]
fn moves_serialize_with_serde() {
    let moves = move_core::Move::examples();
    let json = serde_json::to_string(&moves).expect("serialize");
    let back: Vec<move_core::Move> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, moves);

    let bad = json.replace("\"level\":2", "\"level\":9");
    assert!(serde_json::from_str::<Vec<move_core::Move>>(&bad).is_err());
}
