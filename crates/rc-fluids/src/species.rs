//! Propellant and exhaust species.

/// Species that appear along a bipropellant feed path or in its exhaust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    /// Ethanol (C₂H₅OH)
    Ethanol,
    /// Oxygen (O₂)
    O2,
    /// Carbon dioxide (CO₂)
    CO2,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Ethanol, Species::O2, Species::CO2];

    pub fn key(&self) -> &'static str {
        match self {
            Species::Ethanol => "Ethanol",
            Species::O2 => "O2",
            Species::CO2 => "CO2",
        }
    }

    /// Get CoolProp fluid name for this species.
    pub fn coolprop_name(&self) -> &'static str {
        match self {
            Species::Ethanol => "Ethanol",
            Species::O2 => "Oxygen",
            Species::CO2 => "CarbonDioxide",
        }
    }

    /// Map to rfluids Pure enum (internal use for CoolProp backend).
    pub(crate) fn rfluids_pure(&self) -> rfluids::substance::Pure {
        use rfluids::substance::Pure;
        match self {
            Species::Ethanol => Pure::Ethanol,
            Species::O2 => Pure::Oxygen,
            Species::CO2 => Pure::CarbonDioxide,
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::Ethanol => "Ethanol",
            Species::O2 => "Oxygen",
            Species::CO2 => "Carbon Dioxide",
        }
    }

    /// Get molar mass [g/mol] for this species.
    ///
    /// Values sourced from standard reference data (e.g., NIST).
    pub fn molar_mass(&self) -> f64 {
        match self {
            Species::Ethanol => 46.068,
            Species::O2 => 31.999,
            Species::CO2 => 44.010,
        }
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ETHANOL" | "C2H5OH" | "ETOH" => Ok(Species::Ethanol),
            "O2" | "OXYGEN" | "LOX" => Ok(Species::O2),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Species::CO2),
            _ => Err("unknown species"),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
