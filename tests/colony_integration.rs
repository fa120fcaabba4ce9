//! Integration tests for the colony lifecycle
//!
//! These walk a colony through the complete arc: founding, queen-led
//! ticking, mid-tick starvation, and terminal dormancy - all through the
//! meadow's public API.

use meadow_sim::core::config::SimulationConfig;
use meadow_sim::core::types::SpeciesId;
use meadow_sim::entity::ant::Ant;
use meadow_sim::simulation::colony::TickOutcome;
use meadow_sim::simulation::events::SimulationEvent;
use meadow_sim::simulation::world::Meadow;

fn test_config(starting_food: u32) -> SimulationConfig {
    SimulationConfig {
        seed: 42,
        starting_food,
        ..SimulationConfig::default()
    }
}

#[test]
fn test_colony_lifecycle_to_starvation() {
    let config = test_config(100);
    let mut meadow = Meadow::new(config.clone()).expect("valid config");

    let id = meadow.create_colony("Colony1", SpeciesId(0)).unwrap();
    {
        let colony = meadow.colony_mut(id).unwrap();
        colony.set_queen(Ant::queen("Queen1", SpeciesId(0), &config));
        colony.add_ant(Ant::drone("Drone1", SpeciesId(0), &config));
    }

    // 100 food, 20 per tick: 5 full ticks, starvation on the 6th.
    let mut starved_on = None;
    for tick in 1..=10u64 {
        let events = meadow.tick();
        if !events.is_empty() {
            starved_on = Some(tick);
            assert!(matches!(
                events[0],
                SimulationEvent::ColonyStarved {
                    colony,
                    ants_processed: 0,
                } if colony == id
            ));
            break;
        }
    }

    assert_eq!(starved_on, Some(6));

    let colony = meadow.colony(id).unwrap();
    assert!(!colony.is_active());
    assert_eq!(colony.food.available(), 0);

    // Energy changes from the live ticks stand: the queen worked 6 times
    // (her 6th act preceded the failed consumption), the drone 5 times.
    assert_eq!(colony.ants()[0].energy, 100 - 6 * config.work_cost);
    assert_eq!(colony.ants()[1].energy, 100 - 5 * config.work_cost);
}

#[test]
fn test_starved_colony_stays_dormant_forever() {
    let config = test_config(10);
    let mut meadow = Meadow::new(config.clone()).expect("valid config");

    let id = meadow.create_colony("Colony1", SpeciesId(0)).unwrap();
    meadow
        .colony_mut(id)
        .unwrap()
        .set_queen(Ant::queen("Queen1", SpeciesId(0), &config));

    // Tick 1 feeds the queen (10 food exactly); tick 2 starves her.
    assert!(meadow.tick().is_empty());
    assert_eq!(meadow.tick().len(), 1);

    let energy_at_death = meadow.colony(id).unwrap().ants()[0].energy;

    for _ in 0..20 {
        assert!(meadow.tick().is_empty(), "dormant colonies emit nothing");
    }

    let colony = meadow.colony(id).unwrap();
    assert!(!colony.is_active());
    assert_eq!(
        colony.ants()[0].energy,
        energy_at_death,
        "no acting happens after deactivation"
    );
}

#[test]
fn test_fail_fast_spares_later_ants_that_tick() {
    let config = test_config(25);
    let mut meadow = Meadow::new(config.clone()).expect("valid config");

    let id = meadow.create_colony("Colony1", SpeciesId(0)).unwrap();
    {
        let colony = meadow.colony_mut(id).unwrap();
        colony.set_queen(Ant::queen("Queen1", SpeciesId(0), &config));
        colony.add_ant(Ant::drone("Drone1", SpeciesId(0), &config));
        colony.add_ant(Ant::warrior("Warrior1", SpeciesId(0), &config));
    }

    // 25 food: queen eats (15 left), drone eats (5 left), warrior's
    // consumption fails. The warrior acted but never starves the others
    // retroactively.
    let events = meadow.tick();
    assert!(matches!(
        events.as_slice(),
        [SimulationEvent::ColonyStarved {
            ants_processed: 2,
            ..
        }]
    ));

    let colony = meadow.colony(id).unwrap();
    assert_eq!(colony.food.available(), 5, "spent food stays spent");
    assert_eq!(colony.ants()[0].energy, 90, "queen acted and fed");
    assert_eq!(colony.ants()[1].energy, 90, "drone acted and fed");
    assert_eq!(colony.ants()[2].energy, 90, "warrior acted, then went unfed");
}

#[test]
fn test_worker_cycles_between_work_and_rest() {
    // With ample food a lone drone colony settles into the sawtooth:
    // work down from 100 to 20, then alternate rest (+20) and work (-10).
    let config = test_config(100_000);
    let mut meadow = Meadow::new(config.clone()).expect("valid config");

    let id = meadow.create_colony("Colony1", SpeciesId(0)).unwrap();
    {
        let colony = meadow.colony_mut(id).unwrap();
        colony.set_queen(Ant::queen("Queen1", SpeciesId(0), &config));
        colony.add_ant(Ant::drone("Drone1", SpeciesId(0), &config));
    }

    let mut seen = Vec::new();
    for _ in 0..12 {
        meadow.tick();
        seen.push(meadow.colony(id).unwrap().ants()[1].energy);
    }

    assert_eq!(
        seen,
        vec![90, 80, 70, 60, 50, 40, 30, 20, 40, 30, 20, 40],
        "drone works to 20, rests to 40, and repeats"
    );
}

#[test]
fn test_outcome_reporting_through_direct_colony_tick() {
    let config = test_config(40);
    let mut meadow = Meadow::new(config.clone()).expect("valid config");

    let id = meadow.create_colony("Colony1", SpeciesId(0)).unwrap();
    let colony = meadow.colony_mut(id).unwrap();
    colony.set_queen(Ant::queen("Queen1", SpeciesId(0), &config));
    colony.add_ant(Ant::warrior("Warrior1", SpeciesId(0), &config));

    assert_eq!(colony.tick(&config), TickOutcome::Advanced { ants_processed: 2 });
    assert_eq!(colony.tick(&config), TickOutcome::Advanced { ants_processed: 2 });
    assert_eq!(colony.tick(&config), TickOutcome::Exhausted { ants_processed: 0 });
    assert_eq!(colony.tick(&config), TickOutcome::Dormant);
}
