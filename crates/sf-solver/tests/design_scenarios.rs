//! End-to-end design scenarios against the built-in property data.

use sf_column::GasMixture;
use sf_core::units::{bar, celsius, kgps, m};
use sf_props::BuiltinStore;
use sf_solver::{
    DesignError, DesignObjective, DesignSpec, LiquidProperties, OperatingConditions,
    ScrubberDesigner, SolveMode,
};

const STORE: BuiltinStore = BuiltinStore;

fn flue_gas() -> GasMixture {
    GasMixture::from_mole_percents(
        &STORE,
        &[("N2", 73.0), ("CO2", 12.0), ("H2O", 12.0), ("O2", 3.0)],
    )
    .unwrap()
}

fn mea_spec(objective: DesignObjective) -> DesignSpec {
    DesignSpec {
        mixture: flue_gas(),
        solvent: "Monoethanolamine".to_string(),
        packing: "Mellapak 250Y".to_string(),
        target_species: "CO2".to_string(),
        gas_flow: kgps(1.0),
        conditions: OperatingConditions {
            temperature: celsius(40.0),
            pressure: bar(1.01),
            flooding_fraction: 0.70,
        },
        liquid: LiquidProperties::water(),
        objective,
    }
}

#[test]
fn mea_flue_gas_height_solve() {
    let spec = mea_spec(DesignObjective::SolveForHeight {
        liquid_flow: kgps(3.0),
        removal_target: 0.90,
    });
    let result = ScrubberDesigner::new(&STORE).solve(&spec).unwrap();

    assert!(result.solve.converged);
    assert_eq!(result.solve.mode, SolveMode::PackedHeight);
    assert!(result.solve.iterations <= 60);
    assert_eq!(result.controlling_species, "CO2");

    // amine-enhanced CO2 absorption: modest column
    let z = result.packed_height.value;
    assert!(z > 0.05 && z < 5.0, "packed height {z}");
    assert!((result.target_removal_achieved - 0.90).abs() < 1e-3);

    // one acid gas in the mixture
    assert_eq!(result.species.len(), 1);
    let co2 = &result.species[0];
    assert!(!co2.removal_capped);
    assert!(co2.absorption_factor > 1.0, "A = {}", co2.absorption_factor);
    assert!((co2.m_slope - 0.81).abs() < 0.02, "m = {}", co2.m_slope);
    assert!((co2.enhancement_factor - 150.0).abs() < 1e-9);
    assert!(co2.h_og > 0.01 && co2.h_og < 1.0, "H_OG = {}", co2.h_og);

    // geometry sanity
    assert!(result.geometry.diameter.value > 0.3 && result.geometry.diameter.value < 3.0);
    assert!(result.geometry.design_velocity.value < result.geometry.flooding_velocity.value);
    assert!(result.geometry.wetting_adequate);
    assert!(result.geometry.dp_total > 0.0);
    assert!(result.hetp_height > 0.0);

    // mixture bookkeeping
    assert!((result.mixture_molar_mass - 28.85).abs() < 0.05);
    assert!((result.gas_density - 1.12).abs() < 0.01);
    assert!(result.total_absorbed > 0.0);
}

#[test]
fn exit_fractions_sum_to_one() {
    let spec = mea_spec(DesignObjective::SolveForHeight {
        liquid_flow: kgps(3.0),
        removal_target: 0.90,
    });
    let result = ScrubberDesigner::new(&STORE).solve(&spec).unwrap();

    let total: f64 = result.exit_gas.iter().map(|e| e.outlet_mole_fraction).sum();
    assert!((total - 1.0).abs() < 1e-6, "exit fractions sum to {total}");
    assert_eq!(result.exit_gas.len(), 4);

    // carriers pass through untouched
    for e in &result.exit_gas {
        if e.id == "CO2" {
            assert!((e.removal_fraction - 0.90).abs() < 1e-3);
            assert!(e.absorbed_molar_rate > 0.0);
        } else {
            assert_eq!(e.removal_fraction, 0.0);
            assert_eq!(e.absorbed_molar_rate, 0.0);
            // renormalization lifts inert fractions above their inlet value
            assert!(e.outlet_mole_fraction > e.inlet_mole_fraction);
        }
    }
}

#[test]
fn height_then_removal_round_trips() {
    let designer = ScrubberDesigner::new(&STORE);
    let height_spec = mea_spec(DesignObjective::SolveForHeight {
        liquid_flow: kgps(3.0),
        removal_target: 0.90,
    });
    let sized = designer.solve(&height_spec).unwrap();
    assert!(sized.solve.converged);

    let check_spec = mea_spec(DesignObjective::SolveForRemoval {
        liquid_flow: kgps(3.0),
        packed_height: sized.packed_height,
    });
    let checked = designer.solve(&check_spec).unwrap();
    assert!(checked.solve.converged);
    assert_eq!(checked.solve.mode, SolveMode::Removal);
    assert!(
        (checked.solve.value - 0.90).abs() < 1e-3,
        "round-trip removal {}",
        checked.solve.value
    );
}

#[test]
fn taller_column_achieves_more_removal() {
    let designer = ScrubberDesigner::new(&STORE);
    let mut removals = Vec::new();
    for z in [0.05, 0.10, 0.20] {
        let spec = mea_spec(DesignObjective::SolveForRemoval {
            liquid_flow: kgps(3.0),
            packed_height: m(z),
        });
        let result = designer.solve(&spec).unwrap();
        removals.push(result.solve.value);
    }
    assert!(removals[0] < removals[1] && removals[1] < removals[2], "{removals:?}");
}

#[test]
fn more_solvent_achieves_more_removal() {
    let designer = ScrubberDesigner::new(&STORE);
    let mut removals = Vec::new();
    for l in [1.5, 3.0, 6.0] {
        let spec = mea_spec(DesignObjective::SolveForRemoval {
            liquid_flow: kgps(l),
            packed_height: m(0.15),
        });
        let result = designer.solve(&spec).unwrap();
        removals.push(result.target_removal_achieved);
    }
    assert!(removals[0] < removals[1] && removals[1] < removals[2], "{removals:?}");
}

#[test]
fn solvent_flow_solve_meets_target() {
    let spec = mea_spec(DesignObjective::SolveForFlow {
        removal_target: 0.90,
        packed_height: m(0.25),
    });
    let result = ScrubberDesigner::new(&STORE).solve(&spec).unwrap();

    assert!(result.solve.converged);
    assert_eq!(result.solve.mode, SolveMode::LiquidFlow);
    let l = result.liquid_flow.value;
    assert!(l > 0.5 && l < 10.0, "solvent flow {l}");
    assert!((result.target_removal_achieved - 0.90).abs() < 1e-3);
}

#[test]
fn infeasible_physical_absorption_reports_unconverged() {
    // water gives CO2 a huge equilibrium slope; A stays far below 1 even at
    // the top of the solvent-flow bracket, so 99.99% removal is unreachable
    let mut spec = mea_spec(DesignObjective::SolveForFlow {
        removal_target: 0.9999,
        packed_height: m(2.0),
    });
    spec.solvent = "Water".to_string();

    let result = ScrubberDesigner::new(&STORE).solve(&spec).unwrap();
    assert!(!result.solve.converged);
    assert!(result.solve.iterations <= 60);

    let co2 = &result.species[0];
    assert!(co2.absorption_factor < 1.0);
    assert!(co2.removal_capped);
    assert!(result.target_removal_achieved < co2.absorption_factor);
}

#[test]
fn validation_rejects_bad_inputs() {
    let designer = ScrubberDesigner::new(&STORE);

    let mut bad_ff = mea_spec(DesignObjective::SolveForHeight {
        liquid_flow: kgps(3.0),
        removal_target: 0.9,
    });
    bad_ff.conditions.flooding_fraction = 1.2;
    assert!(matches!(
        designer.solve(&bad_ff).unwrap_err(),
        DesignError::Validation { .. }
    ));

    let mut bad_packing = mea_spec(DesignObjective::SolveForHeight {
        liquid_flow: kgps(3.0),
        removal_target: 0.9,
    });
    bad_packing.packing = "Hyperloop 9000".to_string();
    assert!(matches!(
        designer.solve(&bad_packing).unwrap_err(),
        DesignError::Props(sf_props::PropsError::UnsupportedPacking { .. })
    ));

    let mut bad_target = mea_spec(DesignObjective::SolveForHeight {
        liquid_flow: kgps(3.0),
        removal_target: 0.9,
    });
    bad_target.target_species = "H2S".to_string(); // not in the mixture
    assert!(matches!(
        designer.solve(&bad_target).unwrap_err(),
        DesignError::Validation { .. }
    ));

    let mut inert_target = mea_spec(DesignObjective::SolveForHeight {
        liquid_flow: kgps(3.0),
        removal_target: 0.9,
    });
    inert_target.target_species = "N2".to_string();
    assert!(matches!(
        designer.solve(&inert_target).unwrap_err(),
        DesignError::Validation { .. }
    ));

    let mut bad_solvent = mea_spec(DesignObjective::SolveForHeight {
        liquid_flow: kgps(3.0),
        removal_target: 0.9,
    });
    bad_solvent.solvent = "CO2".to_string();
    assert!(matches!(
        designer.solve(&bad_solvent).unwrap_err(),
        DesignError::Validation { .. }
    ));

    for bad_removal in [0.0, 1.0, -0.5, 1.5] {
        let spec = mea_spec(DesignObjective::SolveForHeight {
            liquid_flow: kgps(3.0),
            removal_target: bad_removal,
        });
        assert!(designer.solve(&spec).is_err(), "accepted removal {bad_removal}");
    }
}
