//! Unit tests for the compartment catalog.

use epi_core::Rgb;

use crate::{default_catalog, names, CatalogError, Compartment, CompartmentCatalog};

fn tiny_catalog() -> CompartmentCatalog {
    let compartments = vec![
        Compartment::new("S", Rgb::new(0, 255, 0)).ratio(9.0),
        Compartment::new("I", Rgb::new(255, 0, 0)).infectious(0.5).ratio(1.0),
        Compartment::new("R", Rgb::new(0, 0, 255)),
        Compartment::new("D", Rgb::new(0, 0, 0)),
    ];
    CompartmentCatalog::new(compartments, "S", "I", "D").unwrap()
}

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn duplicate_names_rejected() {
        let compartments = vec![
            Compartment::new("S", Rgb::new(0, 0, 0)),
            Compartment::new("S", Rgb::new(0, 0, 0)),
        ];
        let err = CompartmentCatalog::new(compartments, "S", "S", "S").unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCompartment("S".into()));
    }

    #[test]
    fn missing_role_rejected() {
        let compartments = vec![Compartment::new("S", Rgb::new(0, 0, 0))];
        let err = CompartmentCatalog::new(compartments, "S", "X", "S").unwrap_err();
        assert!(matches!(err, CatalogError::MissingRole("exposed", _)));
    }

    #[test]
    fn roles_resolve() {
        let cat = tiny_catalog();
        assert_eq!(cat.get(cat.susceptible()).name, "S");
        assert_eq!(cat.get(cat.exposed()).name, "I");
        assert_eq!(cat.get(cat.dead()).name, "D");
        assert!(cat.is_dead(cat.dead()));
    }

    #[test]
    fn clone_is_independent() {
        let a = tiny_catalog();
        let mut b = a.clone();
        b.set_infectiousness("I", 0.9).unwrap();
        assert_eq!(a.get(a.id_of("I").unwrap()).infectiousness, 0.5);
        assert_eq!(b.get(b.id_of("I").unwrap()).infectiousness, 0.9);
    }
}

#[cfg(test)]
mod editing {
    use super::*;

    #[test]
    fn unknown_name_fails_without_mutation() {
        let mut cat = tiny_catalog();
        let before = cat.clone();

        assert!(cat.set_initial_ratio("NOPE", 1.0).is_err());
        assert!(cat.set_infectiousness("NOPE", 1.0).is_err());
        assert!(cat.set_transition("S", "NOPE", 1.0).is_err());
        assert!(cat.set_transition("NOPE", "S", 1.0).is_err());
        assert!(cat.clear_transitions("NOPE").is_err());

        for (id, c) in before.iter() {
            assert_eq!(c, cat.get(id));
        }
    }

    #[test]
    fn set_transition_updates_in_place() {
        let mut cat = tiny_catalog();
        cat.set_transition("I", "R", 0.1).unwrap();
        cat.set_transition("I", "D", 0.2).unwrap();
        // Updating the first edge must not move it behind the second.
        cat.set_transition("I", "R", 0.7).unwrap();

        let i = cat.id_of("I").unwrap();
        let edges = &cat.get(i).transitions;
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0], (cat.id_of("R").unwrap(), 0.7));
        assert_eq!(edges[1], (cat.id_of("D").unwrap(), 0.2));
    }

    #[test]
    fn clear_transition_and_clear_transitions() {
        let mut cat = tiny_catalog();
        cat.set_transition("I", "R", 0.1).unwrap();
        cat.set_transition("I", "D", 0.2).unwrap();

        cat.clear_transition("I", "R").unwrap();
        let i = cat.id_of("I").unwrap();
        assert_eq!(cat.get(i).transitions.len(), 1);

        cat.clear_transitions("I").unwrap();
        assert!(cat.get(i).transitions.is_empty());
    }

    #[test]
    fn probabilities_stored_unclamped() {
        // Range validation is deliberately the caller's responsibility.
        let mut cat = tiny_catalog();
        cat.set_transition("I", "R", 1.7).unwrap();
        let i = cat.id_of("I").unwrap();
        assert_eq!(cat.get(i).transition_to(cat.id_of("R").unwrap()), Some(1.7));
    }

    #[test]
    fn clear_all_resets_to_neutral() {
        let mut cat = tiny_catalog();
        cat.set_transition("I", "R", 0.5).unwrap();
        cat.clear_all();
        for (_, c) in cat.iter() {
            assert_eq!(c.initial_ratio, 0.0);
            assert_eq!(c.infectiousness, 0.0);
            assert!(c.transitions.is_empty());
        }
        // Infectious classification survives a reset.
        assert!(cat.get(cat.id_of("I").unwrap()).infectious);
    }
}

#[cfg(test)]
mod distribution {
    use super::*;
    use epi_core::CompartmentId;

    #[test]
    fn cumulative_ends_at_one() {
        let cat = tiny_catalog();
        let cum = cat.initial_cumulative().unwrap();
        assert_eq!(cum.len(), 4);
        assert!((cum.last().unwrap() - 1.0).abs() < 1e-9);
        assert!((cum[0] - 0.9).abs() < 1e-9);
    }

    #[test]
    fn zero_weight_rejected() {
        let mut cat = tiny_catalog();
        cat.clear_initial_ratio("S").unwrap();
        cat.clear_initial_ratio("I").unwrap();
        assert_eq!(cat.initial_cumulative().unwrap_err(), CatalogError::ZeroInitialWeight);
    }

    #[test]
    fn pick_respects_shares() {
        let cat = tiny_catalog();
        let cum = cat.initial_cumulative().unwrap();
        assert_eq!(CompartmentCatalog::pick_initial(&cum, 0.0), CompartmentId(0));
        assert_eq!(CompartmentCatalog::pick_initial(&cum, 0.89), CompartmentId(0));
        assert_eq!(CompartmentCatalog::pick_initial(&cum, 0.95), CompartmentId(1));
        // Draw at the very top lands in the last nonzero band.
        assert_eq!(CompartmentCatalog::pick_initial(&cum, 0.999999), CompartmentId(1));
    }
}

#[cfg(test)]
mod defaults {
    use super::*;

    #[test]
    fn standard_model_shape() {
        let cat = default_catalog().unwrap();
        assert_eq!(cat.len(), 11);
        assert_eq!(cat.get(cat.susceptible()).name, names::SUSCEPTIBLE);
        assert_eq!(cat.get(cat.exposed()).name, names::INFECTED_EXPOSED);
        assert_eq!(cat.get(cat.dead()).name, names::DEAD);
    }

    #[test]
    fn dead_is_terminal() {
        let cat = default_catalog().unwrap();
        assert!(cat.get(cat.dead()).transitions.is_empty());
        assert!(!cat.get(cat.dead()).infectious);
    }

    #[test]
    fn initial_ratios_are_95_to_5() {
        let cat = default_catalog().unwrap();
        let cum = cat.initial_cumulative().unwrap();
        assert!((cum[cat.susceptible().index()] - 0.95).abs() < 1e-9);
        assert!((cum.last().unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn exposed_edges_keep_definition_order() {
        let cat = default_catalog().unwrap();
        let edges = &cat.get(cat.exposed()).transitions;
        assert_eq!(edges[0].0, cat.id_of(names::INFECTED_ASYMPTOMATIC).unwrap());
        assert_eq!(edges[1].0, cat.id_of(names::INFECTED_SYMPTOMATIC).unwrap());
    }
}
