//! Balance and economy properties that hold for any input sequence.

use proptest::prelude::*;

use td_core::prelude::*;

#[test]
fn starting_balance_covers_two_cheap_cards_but_not_a_third_shooter() {
    let mut sim = Simulation::new(1, Difficulty::Normal, 7);

    sim.place_defender(0, 0, DefenderKind::Generator).unwrap();
    sim.place_defender(1, 0, DefenderKind::Blocker).unwrap();
    assert_eq!(sim.balance(), 50);

    assert_eq!(
        sim.place_defender(2, 0, DefenderKind::Shooter),
        Err(PlacementRejected::InsufficientFunds)
    );
    assert_eq!(sim.balance(), 50);
    assert_eq!(sim.defenders().len(), 2);
}

#[test]
fn wave_totals_scale_with_level_and_difficulty() {
    for (level, difficulty, expected) in [
        (1, Difficulty::Easy, 5),
        (1, Difficulty::Normal, 15),
        (1, Difficulty::Hard, 25),
        (10, Difficulty::Normal, 150),
        (30, Difficulty::Hard, 750),
    ] {
        let sim = Simulation::new(level, difficulty, 0);
        assert_eq!(sim.wave_total(), expected);
    }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Credit(i32),
    Debit(i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-1000i32..1000).prop_map(Op::Credit),
        (-1000i32..1000).prop_map(Op::Debit),
    ]
}

proptest! {
    /// No sequence of credits and debits, including negative and
    /// unaffordable ones, may drive the balance below zero.
    #[test]
    fn prop_balance_never_goes_negative(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut economy = Economy::new();
        for op in ops {
            match op {
                Op::Credit(amount) => {
                    economy.credit(amount);
                }
                Op::Debit(cost) => {
                    economy.debit(cost);
                }
            }
            prop_assert!(economy.balance() >= 0);
        }
    }

    /// A debit either takes exactly its cost or leaves the balance
    /// untouched.
    #[test]
    fn prop_debit_is_exact_or_noop(credit in 0i32..10_000, cost in -100i32..10_000) {
        let mut economy = Economy::new();
        economy.credit(credit);
        let before = economy.balance();
        let accepted = economy.debit(cost);
        if accepted {
            prop_assert_eq!(economy.balance(), before - cost);
        } else {
            prop_assert_eq!(economy.balance(), before);
        }
    }

    /// Identical seeds replay the identical session, tick for tick.
    #[test]
    fn prop_same_seed_replays_identically(seed in any::<u64>()) {
        let mut a = Simulation::new(2, Difficulty::Hard, seed);
        let mut b = Simulation::new(2, Difficulty::Hard, seed);
        for _ in 0..2_000 {
            prop_assert_eq!(a.tick(), b.tick());
            prop_assert_eq!(a.wave_spawned(), b.wave_spawned());
            prop_assert_eq!(a.kills(), b.kills());
        }
    }
}
