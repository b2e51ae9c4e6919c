//! End-to-end planner tests: wizard assembly through schedule generation,
//! plus property coverage of the generator invariants.

use proptest::prelude::*;

use studyflow_core::planner::suggest_for_labels;
use studyflow_core::{
    BlockType, EnergyLevel, Mood, PlanGenerator, PlannerInput, PlannerWizard, TimeBucket,
};

#[test]
fn wizard_to_schedule_flow() {
    let mut wizard = PlannerWizard::new();
    wizard.set_mood(Mood::Energetic);
    wizard.set_energy_level(EnergyLevel::High);

    let outcome = wizard.confirm_mood().unwrap();
    assert_eq!(
        outcome.suggestions,
        vec!["Mathematics", "Programming", "Physics", "Language Learning"]
    );

    wizard.toggle_subject("Mathematics");
    wizard.toggle_subject("Physics");
    wizard.add_custom_subject("Astronomy");
    wizard.set_time_available(TimeBucket::FourPlus);

    let input = wizard.finish().unwrap();
    let schedule = PlanGenerator::new().generate(&input);

    // 300 minutes at 45+10 per pair: 5 study blocks, subjects cycling
    // through the selection order.
    assert_eq!(schedule.len(), 10);
    let subjects: Vec<_> = schedule
        .iter()
        .filter(|b| b.block_type == BlockType::Study)
        .map(|b| b.subject.as_deref().unwrap())
        .collect();
    assert_eq!(
        subjects,
        vec!["Mathematics", "Physics", "Astronomy", "Mathematics", "Physics"]
    );
}

#[test]
fn unknown_labels_disable_suggestions_but_not_generation() {
    assert!(suggest_for_labels("tired", "high").is_empty());

    // Suggestions being empty doesn't stop a user from typing their own
    // subjects and generating.
    let input = PlannerInput {
        mood: Mood::Relaxed,
        energy_level: EnergyLevel::Medium,
        time_available: TimeBucket::OneToTwo,
        subjects: vec!["Astronomy".to_string()],
    };
    let schedule = PlanGenerator::new().generate(&input);
    assert_eq!(schedule.len(), 4); // floor(90/40) pairs
}

fn any_energy() -> impl Strategy<Value = EnergyLevel> {
    prop_oneof![
        Just(EnergyLevel::High),
        Just(EnergyLevel::Medium),
        Just(EnergyLevel::Low),
    ]
}

fn any_bucket() -> impl Strategy<Value = TimeBucket> {
    prop_oneof![
        Just(TimeBucket::OneToTwo),
        Just(TimeBucket::TwoToFour),
        Just(TimeBucket::FourPlus),
    ]
}

fn any_mood() -> impl Strategy<Value = Mood> {
    prop_oneof![
        Just(Mood::Energetic),
        Just(Mood::Focused),
        Just(Mood::Relaxed),
    ]
}

proptest! {
    #[test]
    fn generator_invariants(
        mood in any_mood(),
        energy_level in any_energy(),
        time_available in any_bucket(),
        subjects in proptest::collection::vec("[A-Za-z ]{1,24}", 1..6),
    ) {
        let input = PlannerInput { mood, energy_level, time_available, subjects };
        let schedule = PlanGenerator::new().generate(&input);

        let planning_minutes = input.time_available.planning_minutes();
        let study_minutes = input.energy_level.study_block_minutes();
        let expected_pairs = planning_minutes / (study_minutes + 10);

        // Study and break blocks alternate and come in equal numbers.
        prop_assert_eq!(schedule.len() as u32, expected_pairs * 2);
        for (i, block) in schedule.iter().enumerate() {
            if i % 2 == 0 {
                prop_assert_eq!(block.block_type, BlockType::Study);
                prop_assert_eq!(block.duration_minutes, study_minutes);
                prop_assert_eq!(
                    block.subject.as_deref(),
                    Some(input.subjects[(i / 2) % input.subjects.len()].as_str())
                );
                prop_assert!(block.technique.is_some());
            } else {
                prop_assert_eq!(block.block_type, BlockType::Break);
                prop_assert_eq!(block.duration_minutes, 10);
                prop_assert!(block.subject.is_none());
            }
        }

        // Determinism: a second run is identical.
        let again = PlanGenerator::new().generate(&input);
        prop_assert_eq!(schedule, again);
    }
}
