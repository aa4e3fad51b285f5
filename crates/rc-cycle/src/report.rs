//! Plain-text rendering of a scenario report.

use crate::pipeline::{ScenarioReport, StreamReport};
use crate::states::Location;
use rc_core::units::to_celsius;
use std::fmt::Write;

const LABEL_WIDTH: usize = 44;

fn line(out: &mut String, label: &str, value: f64, unit: &str) {
    let _ = writeln!(out, "  {:<width$} {:>12.2} {}", label, value, unit, width = LABEL_WIDTH);
}

fn stream(out: &mut String, stream: &StreamReport) {
    let name = stream.states.species.display_name();
    for location in [Location::Injector, Location::PreHeat, Location::Tank] {
        let point = stream.states.at(location);
        line(
            out,
            &format!("{} {} temperature", name, location.label()),
            to_celsius(point.temperature),
            "°C",
        );
        line(
            out,
            &format!("{} {} enthalpy", name, location.label()),
            point.enthalpy,
            "J/kg",
        );
    }
    line(out, &format!("{} pump work", name), stream.pump.reported_work, "W");
}

/// Labelled, two-decimal summary of one scenario.
pub fn render(report: &ScenarioReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", report.scenario.name);

    line(&mut out, "Total mass flow", report.flow.total_mass.value, "kg/s");
    line(&mut out, "Fuel molar flow", report.flow.fuel_molar, "mol/s");
    line(&mut out, "Oxidizer molar flow", report.flow.oxidizer_molar, "mol/s");

    let heat = &report.heat;
    line(&mut out, "Combustion heat", heat.combustion.value / 1e3, "kJ/s");
    line(&mut out, "Heat into wall", heat.wall.value / 1e3, "kJ/s");
    line(&mut out, "Heat into wall", heat.wall.value, "J/s");
    line(&mut out, "Heat absorbed by fuel", heat.fuel_absorbed.value, "J/s");
    line(&mut out, "Heat attributed to oxidizer", heat.oxidizer_absorbed.value, "J/s");

    stream(&mut out, &report.fuel);
    stream(&mut out, &report.oxidizer);

    let thrust = &report.thrust;
    line(&mut out, "Chamber enthalpy", thrust.chamber_enthalpy, "J/kg");
    line(&mut out, "Exit enthalpy", thrust.exit.enthalpy, "J/kg");
    line(&mut out, "Exit temperature", to_celsius(thrust.exit.temperature), "°C");
    line(&mut out, "Exhaust velocity", thrust.exhaust_velocity.value, "m/s");
    line(&mut out, "Mach number", thrust.mach, "");
    line(&mut out, "Thrust", thrust.thrust.value, "N");
    out
}
