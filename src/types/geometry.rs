//! Defines the NWM output geometries and the variables each one carries.

use std::fmt;

/// A variable published for one [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    /// Human readable name, e.g. "Snow Water Equivalent".
    pub name: &'static str,
    /// The value sent as the `variable` query parameter, e.g. "SNEQV".
    pub code: &'static str,
}

impl Variable {
    const fn new(name: &'static str, code: &'static str) -> Self {
        Self { name, code }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

const CHANNEL_VARIABLES: &[Variable] = &[
    Variable::new("Streamflow", "streamflow"),
    Variable::new("Velocity", "velocity"),
];

const LAND_VARIABLES: &[Variable] = &[
    Variable::new("Snow Depth", "SNOWH"),
    Variable::new("Snow Water Equivalent", "SNEQV"),
    Variable::new("Snow Cover", "FSNO"),
    Variable::new("Accumulated Total ET", "ACCET"),
    Variable::new("Near Surface Soil Saturation", "SOILSAT_TOP"),
    Variable::new("Accumulated Groundwater Runoff", "UGDRNOFF"),
    Variable::new("Accumulated Surface Runoff", "SFCRNOFF"),
    Variable::new("Accumulated Canopy Evaporation", "ACCECAN"),
    Variable::new("Soil Temperature", "SOIL_T"),
    Variable::new("Volumetric Soil Moisture", "SOIL_M"),
    Variable::new("Total Canopy Water", "CANWAT"),
];

const RESERVOIR_VARIABLES: &[Variable] = &[
    Variable::new("Inflow", "inflow"),
    Variable::new("Outflow", "outflow"),
];

const FORCING_VARIABLES: &[Variable] = &[
    Variable::new("Rain Rate", "RAINRATE"),
    Variable::new("Surface Downward Longwave Radiation", "LWDOWN"),
    Variable::new("Surface Downward Shortwave Radiation Flux", "SWDOWN"),
    Variable::new("2-m Specific Humidity", "Q2D"),
    Variable::new("2-m Air Temperature", "T2D"),
    Variable::new("10-m U-component of Wind", "U2D"),
    Variable::new("10-m V-component of Wind", "V2D"),
];

/// The spatial feature type of NWM output.
///
/// Channel and reservoir features are addressed by a single reach COMID;
/// land and forcing grids are addressed by a pair of grid indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// Channel routing output on NHDPlus reaches.
    Channel,
    /// Land surface model output on the 1 km grid.
    Land,
    /// Reservoir output at lake objects.
    Reservoir,
    /// Meteorological forcing on the 1 km grid.
    Forcing,
}

impl Geometry {
    pub const ALL: [Geometry; 4] = [
        Geometry::Channel,
        Geometry::Land,
        Geometry::Reservoir,
        Geometry::Forcing,
    ];

    /// The value sent as the `geom` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Geometry::Channel => "channel_rt",
            Geometry::Land => "land",
            Geometry::Reservoir => "reservoir",
            Geometry::Forcing => "forcing",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Geometry::Channel => "Channel",
            Geometry::Land => "Land",
            Geometry::Reservoir => "Reservoir",
            Geometry::Forcing => "Forcing",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|geom| geom.code() == code)
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|geom| geom.display_name() == name)
    }

    /// All variables published for this geometry.
    pub fn variables(&self) -> &'static [Variable] {
        match self {
            Geometry::Channel => CHANNEL_VARIABLES,
            Geometry::Land => LAND_VARIABLES,
            Geometry::Reservoir => RESERVOIR_VARIABLES,
            Geometry::Forcing => FORCING_VARIABLES,
        }
    }

    /// Looks up a variable of this geometry by its wire code.
    pub fn variable(&self, code: &str) -> Option<Variable> {
        self.variables()
            .iter()
            .find(|variable| variable.code == code)
            .copied()
    }

    /// Number of integers needed to address one feature of this geometry.
    pub fn identifier_arity(&self) -> usize {
        match self {
            Geometry::Channel | Geometry::Reservoir => 1,
            Geometry::Land | Geometry::Forcing => 2,
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
