//! Property-based tests using proptest.
//!
//! Clamping and no-op invariants of the car over random operation sequences.

use proptest::prelude::*;

use super::config::CarConfig;
use super::event::{Event, Refusal};
use super::{Car, FuelTank, CUPCAKE_FUEL_COST, LOW_FUEL_THRESHOLD, TANK_CAPACITY};

#[derive(Debug, Clone, Copy)]
enum Op {
    StartEngine,
    StopEngine,
    Accelerate(f32),
    Brake(f32),
    Refuel(f32),
    ThrowCupcake,
    ReloadCupcakes,
}

/// Ordinary values, with the occasional NaN or infinity mixed in
fn amount(range: std::ops::Range<f32>) -> impl Strategy<Value = f32> {
    prop_oneof![
        8 => range,
        1 => Just(f32::NAN),
        1 => Just(f32::INFINITY),
        1 => Just(f32::NEG_INFINITY),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::StartEngine),
        Just(Op::StopEngine),
        amount(0.0..30.0).prop_map(Op::Accelerate),
        amount(0.0..30.0).prop_map(Op::Brake),
        amount(-50.0..150.0).prop_map(Op::Refuel),
        Just(Op::ThrowCupcake),
        Just(Op::ReloadCupcakes),
    ]
}

fn apply(car: &mut Car, op: Op) {
    match op {
        Op::StartEngine => {
            car.start_engine();
        }
        Op::StopEngine => {
            car.stop_engine();
        }
        Op::Accelerate(time) => {
            let _ = car.accelerate(time);
        }
        Op::Brake(time) => {
            car.brake(time);
        }
        Op::Refuel(amount) => {
            car.refuel(amount);
        }
        Op::ThrowCupcake => {
            let _ = car.throw_cupcake();
        }
        Op::ReloadCupcakes => {
            let _ = car.reload_cupcakes();
        }
    }
}

fn car_with(fuel: f32, max_speed: f32) -> Car {
    Car::new(&CarConfig::default().with_fuel(fuel).with_max_speed(max_speed)).unwrap()
}

proptest! {
    // ========================================================================
    // Clamping
    // ========================================================================

    /// Fuel and speed stay in range whatever the car is asked to do
    #[test]
    fn prop_state_stays_in_range(
        fuel in -50.0f32..200.0,
        max_speed in 1.0f32..400.0,
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut car = car_with(fuel, max_speed);

        for op in ops {
            apply(&mut car, op);
            prop_assert!((0.0..=TANK_CAPACITY).contains(&car.fuel()));
            prop_assert!((0.0..=car.max_speed()).contains(&car.speed()));
            prop_assert!(car.cupcakes() <= 1);
        }
    }

    /// The warning fires exactly when the post-mutation level is below 10
    #[test]
    fn prop_low_fuel_warning_matches_level(
        start in 0.0f32..100.0,
        delta in -120.0f32..120.0,
    ) {
        let mut tank = FuelTank::new(start);

        let warning = if delta < 0.0 {
            tank.use_fuel(-delta)
        } else {
            tank.refuel(delta)
        };

        prop_assert_eq!(warning.is_some(), tank.level() < LOW_FUEL_THRESHOLD);
    }

    // ========================================================================
    // Refusals leave state alone
    // ========================================================================

    #[test]
    fn prop_stop_engine_always_halts(
        ops in prop::collection::vec(op(), 0..20),
    ) {
        let mut car = car_with(100.0, 200.0);
        for op in ops {
            apply(&mut car, op);
        }

        car.stop_engine();

        prop_assert_eq!(car.speed(), 0.0);
    }

    #[test]
    fn prop_accelerate_with_engine_off_is_noop(
        fuel in 0.0f32..100.0,
        time in 0.0f32..30.0,
    ) {
        let mut car = car_with(fuel, 200.0);
        let before = car.clone();

        prop_assert_eq!(car.accelerate(time), Err(Refusal::EngineOff));
        prop_assert_eq!(car, before);
    }

    #[test]
    fn prop_throw_below_cost_is_noop(fuel in 0.0f32..CUPCAKE_FUEL_COST) {
        let mut car = car_with(fuel, 200.0);
        let before = car.clone();

        prop_assert_eq!(car.throw_cupcake(), Err(Refusal::InsufficientFuel));
        prop_assert_eq!(car, before);
    }

    #[test]
    fn prop_throw_costs_exactly_fifteen(fuel in CUPCAKE_FUEL_COST..=TANK_CAPACITY) {
        let mut car = car_with(fuel, 200.0);

        let events = car.throw_cupcake().unwrap();

        prop_assert_eq!(car.cupcakes(), 0);
        prop_assert_eq!(car.fuel(), (fuel - CUPCAKE_FUEL_COST).clamp(0.0, TANK_CAPACITY));
        prop_assert_eq!(events.last(), Some(&Event::CupcakeThrown));
    }
}
