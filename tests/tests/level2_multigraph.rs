//! Level 2 - Multigraphs.
//!
//! Edge conditions quantified over parallel edges.

use motif_tests::prelude::*;

/// A => B carries weights 5 and 7, C => D carries 5 twice, E => F splits a
/// red colour and weight 5 over two edges.
fn bundles() -> HostBuilder {
    HostBuilder::directed_multi()
        .edge("A", "B", attrs! { "weight" => 5 })
        .edge("A", "B", attrs! { "weight" => 7 })
        .edge("C", "D", attrs! { "weight" => 5 })
        .edge("C", "D", attrs! { "weight" => 5 })
        .edge("E", "F", attrs! { "color" => "red" })
        .edge("E", "F", attrs! { "weight" => 5 })
}

fn weight_five() -> MotifBuilder {
    Motif::builder()
        .edge("x", "y")
        .edge_constraint("x", "y", "weight", Operator::Eq, 5)
}

fn red_and_five() -> MotifBuilder {
    weight_five().edge_constraint("x", "y", "color", Operator::Eq, "red")
}

mod any_mode {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("any_mode")
            .host(bundles())
            .step("weight_five", weight_five(), |a| {
                a.exactly(&[
                    row! { x: "A", y: "B" },
                    row! { x: "C", y: "D" },
                    row! { x: "E", y: "F" },
                ])
            })
            .step("covered_by_two_edges", red_and_five(), |a| {
                a.exactly(&[row! { x: "E", y: "F" }])
            })
            .step(
                "uncoverable",
                weight_five().edge_constraint("x", "y", "weight", Operator::Eq, 9),
                |a| a.empty(),
            )
    }

    #[test]
    fn test_any_mode() {
        scenario().run().unwrap();
    }
}

mod all_mode {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("all_mode")
            .host(bundles())
            .config(ExecutorConfig::new().with_edge_match(EdgeMatchMode::All))
            .step("weight_five", weight_five(), |a| {
                a.exactly(&[row! { x: "C", y: "D" }])
            })
            .step("red_and_five", red_and_five(), |a| a.empty())
            .step(
                "weight_at_least_five",
                Motif::builder()
                    .edge("x", "y")
                    .edge_constraint("x", "y", "weight", Operator::GtEq, 5),
                |a| a.exactly(&[row! { x: "A", y: "B" }, row! { x: "C", y: "D" }]),
            )
    }

    #[test]
    fn test_all_mode() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_all_mode_from_json() {
        let config = ExecutorConfig::from_json(r#"{ "edge_match": "all" }"#).unwrap();
        Scenario::new("all_mode_from_json")
            .host(bundles())
            .config(config)
            .step("weight_five", weight_five(), |a| a.count(1))
            .run()
            .unwrap();
    }
}

mod configuration {
    use super::*;

    #[test]
    fn test_invalid_mode_is_a_configuration_error() {
        let err = "every".parse::<EdgeMatchMode>().unwrap_err();
        assert!(err.to_string().contains("every"));

        let err = ExecutorConfig::from_json(r#"{ "edge_match": "every" }"#).unwrap_err();
        assert_eq!(err, ConfigError::invalid_edge_match_mode("every"));

        let host = HostBuilder::directed_multi().build().unwrap();
        let err = Executor::with_edge_match_mode(host.graph(), "every").err().unwrap();
        assert!(matches!(err, QueryError::Config(ConfigError::InvalidEdgeMatchMode { .. })));
    }
}

mod undirected_multigraph {
    use super::*;

    #[test]
    fn test_parallel_edges_without_direction() {
        Scenario::new("undirected_multigraph")
            .host(
                HostBuilder::undirected_multi()
                    .node("A", attrs! { "kind" => "hub" })
                    .node("B", attrs!())
                    .edge("B", "A", attrs! { "weight" => 1 })
                    .edge("A", "B", attrs! { "weight" => 2 }),
            )
            .step(
                "both_weights_present",
                Motif::builder()
                    .edge("x", "y")
                    .node_constraint("x", "kind", Operator::Eq, "hub")
                    .edge_constraint("x", "y", "weight", Operator::Eq, 1)
                    .edge_constraint("x", "y", "weight", Operator::Eq, 2),
                |a| a.exactly(&[row! { x: "A", y: "B" }]),
            )
            .run()
            .unwrap();
    }

    #[test]
    fn test_all_mode_over_undirected_bundle() {
        Scenario::new("undirected_all")
            .host(
                HostBuilder::undirected_multi()
                    .edge("A", "B", attrs! { "weight" => 1 })
                    .edge("B", "A", attrs! { "weight" => 2 }),
            )
            .config(ExecutorConfig::new().with_edge_match(EdgeMatchMode::All))
            .step(
                "all_positive",
                Motif::builder()
                    .edge("x", "y")
                    .edge_constraint("x", "y", "weight", Operator::Gt, 0),
                |a| a.count(2),
            )
            .step(
                "all_heavy",
                Motif::builder()
                    .edge("x", "y")
                    .edge_constraint("x", "y", "weight", Operator::Gt, 1),
                |a| a.empty(),
            )
            .run()
            .unwrap();
    }
}
