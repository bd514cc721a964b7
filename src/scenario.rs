//! The four fixed demonstrations. Each one performs a single call chain,
//! checks for absence immediately after the call that may produce it, and
//! never dereferences an unchecked result.

use crate::np_debug;
use crate::probe::{acquire_container, Container};
use crate::report::Outcome;
use itertools::Itertools;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Demonstration kinds, in run order.
#[derive(Copy, Clone, PartialEq, Debug, EnumString, Display)]
pub enum Kind {
    /// Helper by value from a stack container, then an absent accessor.
    #[strum(serialize = "value-chain")]
    ValueChain,
    /// Same chain, but through a reference to the container.
    #[strum(serialize = "ref-chain")]
    RefChain,
    /// Accessor reached through the explicit dereference step.
    #[strum(serialize = "deref-chain")]
    DerefChain,
    /// Free factory followed by the handle-returning helper factory.
    #[strum(serialize = "factory")]
    Factory,
}

impl Kind {
    /// All demonstrations in run order.
    pub fn all() -> [Kind; 4] {
        [
            Kind::ValueChain,
            Kind::RefChain,
            Kind::DerefChain,
            Kind::Factory,
        ]
    }

    /// Parse a scenario name as accepted on the command line.
    pub fn parse(name: &str) -> Result<Kind, ScenarioError> {
        Kind::from_str(name).map_err(|_| ScenarioError::Unknown(name.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("unknown scenario \"{0}\", known scenarios: {}", known_scenarios_to_string())]
    Unknown(String),
}

pub fn known_scenarios_to_string() -> String {
    format!("[{}]", Kind::all().iter().join(", "))
}

/// Run a single demonstration and return what it observed.
pub fn run(kind: Kind) -> Outcome {
    np_debug!("run scenario {kind}");
    match kind {
        Kind::ValueChain => value_chain(),
        Kind::RefChain => ref_chain(),
        Kind::DerefChain => deref_chain(),
        Kind::Factory => factory(),
    }
}

fn value_chain() -> Outcome {
    let container = Container;
    match container.helper().lookup() {
        Some(helper) => {
            let _ = helper.resolve();
            Outcome::clean("container.helper().lookup()")
        }
        None => Outcome::bug("container.helper().lookup()"),
    }
}

fn ref_chain() -> Outcome {
    let container = Container;
    let container_ref = &container;
    match container_ref.helper().lookup() {
        Some(helper) => {
            let _ = helper.resolve();
            Outcome::clean("container_ref.helper().lookup()")
        }
        None => Outcome::bug("container_ref.helper().lookup()"),
    }
}

fn deref_chain() -> Outcome {
    let container = Container;
    match container.helper().chain().resolve() {
        Some(helper) => {
            let _ = helper.resolve();
            Outcome::clean("container.helper().chain().resolve()")
        }
        None => Outcome::bug("container.helper().chain().resolve()"),
    }
}

fn factory() -> Outcome {
    match acquire_container() {
        Some(container) => match container.helper_handle() {
            Some(helper) => {
                let _ = helper.resolve();
                Outcome::clean("container.helper_handle()")
            }
            None => Outcome::bug("container.helper_handle()"),
        },
        None => Outcome::bug("acquire_container()"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_every_scenario_observes_a_bug() {
        struct TestCase {
            kind: Kind,
            expected_expr: &'static str,
        }

        let cases = [
            TestCase {
                kind: Kind::ValueChain,
                expected_expr: "container.helper().lookup()",
            },
            TestCase {
                kind: Kind::RefChain,
                expected_expr: "container_ref.helper().lookup()",
            },
            TestCase {
                kind: Kind::DerefChain,
                expected_expr: "container.helper().chain().resolve()",
            },
            TestCase {
                kind: Kind::Factory,
                expected_expr: "acquire_container()",
            },
        ];

        for case in cases {
            assert_eq!(run(case.kind), Outcome::bug(case.expected_expr));
        }
    }

    #[test]
    fn test_scenario_runs_deterministic() {
        for kind in Kind::all() {
            assert_eq!(run(kind), run(kind));
        }
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in Kind::all() {
            assert_eq!(Kind::parse(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = Kind::parse("use-after-free").unwrap_err();
        assert!(err.to_string().contains("unknown scenario"));
        assert!(err.to_string().contains("value-chain"));
    }

    #[test]
    fn test_all_runs_in_declaration_order() {
        assert_eq!(
            known_scenarios_to_string(),
            "[value-chain, ref-chain, deref-chain, factory]"
        );
    }
}
