//! End-to-end behaviour of the reference plant.

use pl_components::PressureVessel;
use pl_sim::{Plant, PlantConfig, SimError, VesselKind};

fn plant() -> Plant {
    Plant::standard(&PlantConfig::default()).expect("standard plant builds")
}

fn rate(plant: &Plant, name: &str) -> i64 {
    plant.flow(plant.find(name).unwrap()).unwrap().rate()
}

#[test]
fn first_steps_heat_boil_and_drive_the_turbine() {
    let mut plant = plant();
    let pump1 = plant.find("pump1").unwrap();
    let coolant = plant.find("coolant_pump").unwrap();
    plant.set_control_rods(0).unwrap();
    plant.set_pump_rpm(pump1, 1000).unwrap();
    plant.set_pump_rpm(coolant, 1000).unwrap();

    plant.step().unwrap();
    assert_eq!(rate(&plant, "condenser"), 400);
    assert_eq!(rate(&plant, "pump1"), 200);
    assert_eq!(rate(&plant, "pump2"), 200);
    assert_eq!(rate(&plant, "branch4"), 400);
    assert_eq!(plant.reactor().water_volume(), 8400);
    assert_eq!(plant.reactor().temperature(), 150);
    assert_eq!(plant.condenser().water_volume(), 1600);
    assert_eq!(plant.condenser().temperature(), 20);

    plant.step().unwrap();
    assert_eq!(plant.reactor().temperature(), 244);

    plant.step().unwrap();
    assert_eq!(plant.reactor().temperature(), 334);
    assert_eq!(plant.reactor().water_volume(), 9133);
    assert_eq!(plant.reactor().steam_volume(), 134);
    assert_eq!(plant.reactor().pressure(), 20);

    plant.step().unwrap();
    assert_eq!(rate(&plant, "reactor"), 134);
    assert_eq!(rate(&plant, "valve1"), 67);
    assert_eq!(rate(&plant, "turbine"), 67);
    assert_eq!(rate(&plant, "branch2"), 134);
    assert_eq!(plant.reactor().temperature(), 421);
    assert_eq!(plant.reactor().steam_volume(), 168);
    assert_eq!(plant.condenser().temperature(), 334);
    assert_eq!(plant.condenser().steam_volume(), 0);
    assert_eq!(plant.condenser().water_volume(), 467);

    let turbine = plant.find("turbine").unwrap();
    assert_eq!(plant.spinner(turbine).unwrap().rpm(), 782);
    assert_eq!(plant.power_output(), 6);
    assert_eq!(plant.score(), 60);
}

#[test]
fn closing_both_valves_stops_all_steam() {
    let mut plant = plant();
    plant.reactor_mut().set_steam_volume(1000).unwrap();
    for name in ["valve1", "valve2"] {
        let valve = plant.find(name).unwrap();
        plant.set_valve(valve, false).unwrap();
    }

    plant.step().unwrap();
    assert_eq!(rate(&plant, "reactor"), 0);
    assert_eq!(rate(&plant, "branch2"), 0);
    assert_eq!(plant.reactor().steam_volume(), 1000);
    assert_eq!(plant.condenser().steam_volume(), 0);

    let branch1 = plant.find("branch1").unwrap();
    assert!(plant.blockage().fully_blocked(branch1));
}

#[test]
fn one_closed_valve_caps_steam_at_the_other() {
    let mut plant = plant();
    plant.reactor_mut().set_steam_volume(1000).unwrap();
    let valve1 = plant.find("valve1").unwrap();
    plant.set_valve(valve1, false).unwrap();

    plant.step().unwrap();
    assert_eq!(rate(&plant, "reactor"), 300);
    assert_eq!(rate(&plant, "valve2"), 300);
    assert_eq!(rate(&plant, "valve1"), 0);
    assert_eq!(rate(&plant, "turbine"), 0);
    assert_eq!(plant.reactor().steam_volume(), 700);
    assert_eq!(plant.power_output(), 0);
}

#[test]
fn reopening_a_valve_restores_the_path() {
    let mut plant = plant();
    let valve1 = plant.find("valve1").unwrap();
    let valve2 = plant.find("valve2").unwrap();
    plant.set_valve(valve1, false).unwrap();
    plant.set_valve(valve2, false).unwrap();
    plant.step().unwrap();
    assert_eq!(plant.blockage().blocked_count(), 2);

    plant.set_valve(valve2, true).unwrap();
    plant.step().unwrap();
    assert_eq!(plant.blockage().blocked_count(), 1);
}

#[test]
fn identical_plants_stay_identical() {
    let mut a = plant();
    let mut b = plant();
    for p in [&mut a, &mut b] {
        let pump = p.find("pump2").unwrap();
        p.set_control_rods(30).unwrap();
        p.set_pump_rpm(pump, 700).unwrap();
        p.advance(12).unwrap();
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn overheated_core_fails_once() {
    let mut plant = plant();
    plant.reactor_mut().set_temperature(3000);
    plant.reactor_mut().set_health(10);

    let err = plant.step().unwrap_err();
    match err {
        SimError::PlantFailure(failure) => {
            assert_eq!(failure.vessel, VesselKind::Core);
            assert_eq!(failure.step, 1);
        }
        other => panic!("expected plant failure, got {other:?}"),
    }
    assert!(plant.is_game_over());

    assert_eq!(plant.step(), Err(SimError::GameOver));
    assert_eq!(plant.advance(3), Err(SimError::GameOver));
    assert_eq!(plant.step_count(), 1);
}

#[test]
fn quench_is_one_shot() {
    let mut plant = plant();
    plant.reactor_mut().set_steam_volume(1000).unwrap();
    plant.reactor_mut().set_temperature(900);

    assert!(plant.quench_available());
    assert!(plant.quench());
    assert_eq!(plant.reactor().steam_volume(), 100);
    assert_eq!(plant.reactor().water_volume(), 8450);
    assert_eq!(plant.reactor().temperature(), 50);
    assert_eq!(plant.reactor().pressure(), 15);

    assert!(!plant.quench_available());
    assert!(!plant.quench());
    assert_eq!(plant.reactor().steam_volume(), 100);
}

#[test]
fn broken_pump_is_repaired_after_countdown() {
    let mut plant = plant();
    let pump1 = plant.find("pump1").unwrap();
    plant.set_pump_rpm(pump1, 1000).unwrap();
    plant.fail(pump1).unwrap();
    assert!(plant.request_repair(pump1).unwrap());

    plant.advance(4).unwrap();
    assert_eq!(rate(&plant, "condenser"), 0);
    assert_eq!(plant.repair_remaining(pump1), Some(1));
    assert_eq!(plant.condenser().water_volume(), 2000);

    plant.step().unwrap();
    assert_eq!(plant.repair_remaining(pump1), None);
    assert!(plant.failed_components().is_empty());
    assert_eq!(rate(&plant, "condenser"), 400);
    assert_eq!(plant.condenser().water_volume(), 1600);
}

#[test]
fn broken_turbine_makes_no_power() {
    let mut plant = plant();
    plant.reactor_mut().set_steam_volume(600).unwrap();
    let turbine = plant.find("turbine").unwrap();
    plant.fail(turbine).unwrap();

    plant.step().unwrap();
    assert_eq!(rate(&plant, "turbine"), 250);
    assert_eq!(plant.spinner(turbine).unwrap().rpm(), 0);
    assert_eq!(plant.power_output(), 0);
    assert_eq!(plant.score(), 0);
}

#[test]
fn health_drains_until_core_fails() {
    let mut plant = plant();
    plant.reactor_mut().set_temperature(3000);

    for step in 1..10 {
        plant.step().unwrap();
        assert_eq!(plant.reactor().health(), 100 - 10 * step);
        assert!(!plant.is_game_over());
    }

    match plant.step() {
        Err(SimError::PlantFailure(failure)) => {
            assert_eq!(failure.vessel, VesselKind::Core);
            assert_eq!(failure.step, 10);
        }
        other => panic!("expected plant failure, got {other:?}"),
    }
    assert_eq!(plant.reactor().health(), 0);
    assert_eq!(plant.step(), Err(SimError::GameOver));
}
