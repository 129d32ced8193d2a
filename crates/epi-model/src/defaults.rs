//! The standard SEIR-like default model.
//!
//! Every cluster that does not configure its own catalog receives a clone of
//! this one.  The values are a teaching model, not an epidemiological fit:
//! they produce visibly interesting dynamics at the default 320×320 world
//! with a few hundred agents.

use epi_core::Rgb;

use crate::{CatalogResult, Compartment, CompartmentCatalog};

/// Compartment name constants for the default catalog.
pub mod names {
    pub const SUSCEPTIBLE:           &str = "SUSCEPTIBLE";
    pub const INFECTED_EXPOSED:      &str = "INFECTED_EXPOSED";
    pub const INFECTED_ASYMPTOMATIC: &str = "INFECTED_ASYMPTOMATIC";
    pub const INFECTED_SYMPTOMATIC:  &str = "INFECTED_SYMPTOMATIC";
    pub const INFECTED_ISOLATED:     &str = "INFECTED_ISOLATED";
    pub const INFECTED_HOSPITAL:     &str = "INFECTED_HOSPITAL";
    pub const INFECTED_ICU:          &str = "INFECTED_ICU";
    pub const TREATED:               &str = "TREATED";
    pub const RECOVERED:             &str = "RECOVERED";
    pub const VACCINATED:            &str = "VACCINATED";
    pub const DEAD:                  &str = "DEAD";
}

/// Build the default catalog.
///
/// | Compartment            | infectiousness | ratio | transitions (ordered)                       |
/// |------------------------|----------------|-------|---------------------------------------------|
/// | SUSCEPTIBLE            | —              | 95    | —                                           |
/// | INFECTED_EXPOSED       | 0.30           | 5     | ASYMPTOMATIC 0.4, SYMPTOMATIC 0.5           |
/// | INFECTED_ASYMPTOMATIC  | 0.30           | 0     | RECOVERED 0.1                               |
/// | INFECTED_SYMPTOMATIC   | 0.50           | 0     | ISOLATED 0.6, HOSPITAL 0.1, RECOVERED 0.05  |
/// | INFECTED_ISOLATED      | 0.05           | 0     | RECOVERED 0.1, HOSPITAL 0.05                |
/// | INFECTED_HOSPITAL      | 0.05           | 0     | ICU 0.1, TREATED 0.2, DEAD 0.05             |
/// | INFECTED_ICU           | 0.05           | 0     | DEAD 0.2, HOSPITAL 0.3                      |
/// | TREATED                | 0.05           | 0     | RECOVERED 0.3, SYMPTOMATIC 0.05             |
/// | RECOVERED              | —              | 0     | —                                           |
/// | VACCINATED             | —              | 0     | —                                           |
/// | DEAD                   | —              | 0     | — (terminal)                                |
///
/// Unassigned probability mass on any row means "stay put this tick".
pub fn default_catalog() -> CatalogResult<CompartmentCatalog> {
    use names::*;

    let compartments = vec![
        Compartment::new(SUSCEPTIBLE, Rgb::new(0x2e, 0x8b, 0x57)).ratio(95.0),
        Compartment::new(INFECTED_EXPOSED, Rgb::new(0xff, 0xa5, 0x00))
            .infectious(0.30)
            .ratio(5.0),
        Compartment::new(INFECTED_ASYMPTOMATIC, Rgb::new(0xff, 0xd7, 0x00)).infectious(0.30),
        Compartment::new(INFECTED_SYMPTOMATIC, Rgb::new(0xdc, 0x14, 0x3c)).infectious(0.50),
        Compartment::new(INFECTED_ISOLATED, Rgb::new(0x94, 0x00, 0xd3)).infectious(0.05),
        Compartment::new(INFECTED_HOSPITAL, Rgb::new(0x8b, 0x00, 0x00)).infectious(0.05),
        Compartment::new(INFECTED_ICU, Rgb::new(0x4b, 0x00, 0x00)).infectious(0.05),
        Compartment::new(TREATED, Rgb::new(0x41, 0x69, 0xe1)).infectious(0.05),
        Compartment::new(RECOVERED, Rgb::new(0x20, 0xb2, 0xaa)),
        Compartment::new(VACCINATED, Rgb::new(0x87, 0xce, 0xeb)),
        Compartment::new(DEAD, Rgb::new(0x2f, 0x2f, 0x2f)),
    ];

    let mut catalog = CompartmentCatalog::new(compartments, SUSCEPTIBLE, INFECTED_EXPOSED, DEAD)?;

    // Edge definition order is evaluation order — first match wins.
    catalog.set_transition(INFECTED_EXPOSED, INFECTED_ASYMPTOMATIC, 0.4)?;
    catalog.set_transition(INFECTED_EXPOSED, INFECTED_SYMPTOMATIC, 0.5)?;
    catalog.set_transition(INFECTED_ASYMPTOMATIC, RECOVERED, 0.1)?;
    catalog.set_transition(INFECTED_SYMPTOMATIC, INFECTED_ISOLATED, 0.6)?;
    catalog.set_transition(INFECTED_SYMPTOMATIC, INFECTED_HOSPITAL, 0.1)?;
    catalog.set_transition(INFECTED_SYMPTOMATIC, RECOVERED, 0.05)?;
    catalog.set_transition(INFECTED_ISOLATED, RECOVERED, 0.1)?;
    catalog.set_transition(INFECTED_ISOLATED, INFECTED_HOSPITAL, 0.05)?;
    catalog.set_transition(INFECTED_HOSPITAL, INFECTED_ICU, 0.1)?;
    catalog.set_transition(INFECTED_HOSPITAL, TREATED, 0.2)?;
    catalog.set_transition(INFECTED_HOSPITAL, DEAD, 0.05)?;
    catalog.set_transition(INFECTED_ICU, DEAD, 0.2)?;
    catalog.set_transition(INFECTED_ICU, INFECTED_HOSPITAL, 0.3)?;
    catalog.set_transition(TREATED, RECOVERED, 0.3)?;
    catalog.set_transition(TREATED, INFECTED_SYMPTOMATIC, 0.05)?;

    Ok(catalog)
}
