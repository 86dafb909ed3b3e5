//! Plant model
//!
//! The combined heat and power plant and its optional capture unit.
//! Operating conditions are routinely managed by the plant operator, so
//! they are fixed design constants rather than uncertainties; only the
//! availability factor varies between SOWs.
//!
//! # Critical Invariants
//!
//! 1. A `Plant` is immutable once built
//! 2. CO2 captured per year is strictly positive for any availability in (0, 1]

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::models::world_state::Strategy;

/// Hours in a (non-leap) year
pub const HOURS_PER_YEAR: f64 = 8760.0;

/// Fixed design constants of the plant
///
/// Power and heat outputs differ between strategies: running the capture
/// unit draws steam and electricity, lowering power output and raising
/// recoverable heat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantDesign {
    /// Biomass fuel input [MW]
    pub biomass_input_mw: f64,
    /// Power output without capture [MW]
    pub power_output_wait_mw: f64,
    /// Heat output without capture [MW]
    pub heat_output_wait_mw: f64,
    /// Power output with capture running [MW]
    pub power_output_invest_mw: f64,
    /// Heat output with capture running [MW]
    pub heat_output_invest_mw: f64,
    /// CO2 captured per MWh of biomass burnt [tCO2/MWh]
    pub capture_rate: f64,
    /// Share of captured CO2 lost across the transport and storage chain
    pub leakage_fraction: f64,
    /// Fixed plant OPEX per MW of biomass input [EUR/MW/yr]
    pub fixed_opex_per_mw: f64,
    /// Fixed plant OPEX per MW of biomass input per operating hour [EUR/MWh]
    pub fixed_opex_per_mwh: f64,
}

impl PlantDesign {
    /// Design of the reference facility
    pub fn reference() -> Self {
        Self {
            biomass_input_mw: 362.0,
            power_output_wait_mw: 110.0,
            heat_output_wait_mw: 287.0,
            power_output_invest_mw: 53.0,
            heat_output_invest_mw: 337.0,
            capture_rate: 0.3,
            leakage_fraction: 0.05,
            fixed_opex_per_mw: 29_000.0,
            fixed_opex_per_mwh: 0.5,
        }
    }

    /// Check that the design can produce a strictly positive capture volume
    pub fn validate(&self) -> Result<(), ModelError> {
        let positive = [
            ("biomass_input_mw", self.biomass_input_mw),
            ("capture_rate", self.capture_rate),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ModelError::InvalidPlant(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("power_output_wait_mw", self.power_output_wait_mw),
            ("heat_output_wait_mw", self.heat_output_wait_mw),
            ("power_output_invest_mw", self.power_output_invest_mw),
            ("heat_output_invest_mw", self.heat_output_invest_mw),
            ("fixed_opex_per_mw", self.fixed_opex_per_mw),
            ("fixed_opex_per_mwh", self.fixed_opex_per_mwh),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ModelError::InvalidPlant(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..1.0).contains(&self.leakage_fraction) {
            return Err(ModelError::InvalidPlant(format!(
                "leakage_fraction must be in [0, 1), got {}",
                self.leakage_fraction
            )));
        }

        Ok(())
    }
}

impl Default for PlantDesign {
    fn default() -> Self {
        Self::reference()
    }
}

/// Power and heat delivered per operating hour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyOutputs {
    pub power_mw: f64,
    pub heat_mw: f64,
}

/// A plant with its operating hours and derived annual quantities
///
/// # Example
/// ```
/// use beccs_rdm_core::{Plant, PlantDesign};
///
/// let plant = Plant::new(&PlantDesign::reference(), 0.7);
/// assert!((plant.operating_hours() - 6132.0).abs() < 1e-9);
/// assert!(plant.co2_captured() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    design: PlantDesign,
    availability_factor: f64,
    operating_hours: f64,
    co2_captured: f64,
    fixed_operating_cost: f64,
}

impl Plant {
    /// Build a plant for the given availability factor
    ///
    /// The availability factor is expected to lie in (0, 1]; range checks
    /// belong to `WorldState::validate`.
    pub fn new(design: &PlantDesign, availability_factor: f64) -> Self {
        let operating_hours = HOURS_PER_YEAR * availability_factor;
        let co2_captured = design.capture_rate
            * design.biomass_input_mw
            * (1.0 - design.leakage_fraction)
            * operating_hours;
        let fixed_operating_cost = design.fixed_opex_per_mw * design.biomass_input_mw
            + design.fixed_opex_per_mwh * operating_hours * design.biomass_input_mw;

        Self {
            design: design.clone(),
            availability_factor,
            operating_hours,
            co2_captured,
            fixed_operating_cost,
        }
    }

    pub fn design(&self) -> &PlantDesign {
        &self.design
    }

    pub fn availability_factor(&self) -> f64 {
        self.availability_factor
    }

    /// Operating hours per year [h]
    pub fn operating_hours(&self) -> f64 {
        self.operating_hours
    }

    /// Net CO2 captured and stored per year [tCO2/yr]
    pub fn co2_captured(&self) -> f64 {
        self.co2_captured
    }

    /// Fixed plant operating cost per year [EUR/yr]
    pub fn fixed_operating_cost(&self) -> f64 {
        self.fixed_operating_cost
    }

    /// Biomass fuel input [MW]
    pub fn biomass_input(&self) -> f64 {
        self.design.biomass_input_mw
    }

    /// Outputs of the plant when configured for `strategy`
    pub fn outputs(&self, strategy: Strategy) -> EnergyOutputs {
        match strategy {
            Strategy::Wait => EnergyOutputs {
                power_mw: self.design.power_output_wait_mw,
                heat_mw: self.design.heat_output_wait_mw,
            },
            Strategy::Invest => EnergyOutputs {
                power_mw: self.design.power_output_invest_mw,
                heat_mw: self.design.heat_output_invest_mw,
            },
        }
    }
}
