//! Level 5 - Limits, cancellation and custom oracles.

use std::cell::Cell;

use motif_pattern::StructuralPattern;
use motif_tests::prelude::*;

/// Complete undirected graph on `n` nodes named n0, n1, ...
fn clique(n: usize) -> HostBuilder {
    let mut host = HostBuilder::undirected();
    for i in 0..n {
        for j in i + 1..n {
            host = host.edge(format!("n{i}"), format!("n{j}"), attrs! { "w" => (i + j) as i64 });
        }
    }
    host
}

fn path_of_three() -> MotifBuilder {
    Motif::builder().edge("x", "y").edge("y", "z")
}

mod limits {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("limits")
            .host(clique(6))
            .step("unbounded", path_of_three(), |a| {
                a.count(120).limit_reached(false)
            })
            .limited_step("first_three", path_of_three(), 3, |a| {
                a.count(3).pulled_at_most(3).limit_reached(true)
            })
            .limited_step("zero", path_of_three(), 0, |a| {
                a.empty().pulled_at_most(0)
            })
            .limited_step("more_than_available", path_of_three(), 500, |a| {
                a.count(120).limit_reached(false)
            })
            .limited_step(
                "first_ordered",
                path_of_three(),
                2,
                |a| {
                    a.ordered(&[
                        row! { x: "n0", y: "n1", z: "n2" },
                        row! { x: "n0", y: "n1", z: "n3" },
                    ])
                },
            )
    }

    #[test]
    fn test_limits() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_limit_counts_accepted_not_pulled() {
        // Only edges weighing at least 7 are accepted, so the oracle is asked
        // for more candidates than the limit.
        Scenario::new("limit_after_rejections")
            .host(clique(6))
            .limited_step(
                "heavy_edges",
                Motif::builder()
                    .edge("x", "y")
                    .edge_constraint("x", "y", "w", Operator::GtEq, 7),
                2,
                |a| {
                    a.ordered(&[row! { x: "n2", y: "n5" }, row! { x: "n3", y: "n4" }])
                        .limit_reached(true)
                },
            )
            .run()
            .unwrap();
    }

    #[test]
    fn test_limited_prefix_of_full_result() {
        let host = clique(5).build().unwrap();
        let executor = Executor::new(host.graph());
        let motif = path_of_three().build().unwrap();

        let all = executor.find(&motif, None).unwrap();
        for k in [0, 1, 7, all.len(), all.len() + 1] {
            let limited = executor.find(&motif, Some(k)).unwrap();
            assert_eq!(limited.len(), k.min(all.len()));
            assert_eq!(&limited[..], &all[..limited.len()]);
            assert_eq!(executor.count(&motif, Some(k)).unwrap(), limited.len());
        }
    }
}

mod cancellation {
    use super::*;

    #[test]
    fn test_cancelled_search_returns_nothing() {
        let host = clique(6).build().unwrap();
        let executor = Executor::new(host.graph());
        let motif = path_of_three().build().unwrap();
        let token = CancelToken::new();
        token.cancel();

        let found = executor.find_with_cancel(&motif, None, &token).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_token_shared_across_threads() {
        let token = CancelToken::new();
        let remote = token.clone();
        std::thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(token.is_cancelled());
    }

    /// Cancels the shared token after handing out `after` candidates.
    struct CancellingOracle {
        inner: BacktrackingMatcher,
        token: CancelToken,
        after: usize,
        pulled: Cell<usize>,
    }

    impl MatchOracle for CancellingOracle {
        fn candidates<'a>(
            &'a self,
            pattern: &'a StructuralPattern,
            graph: &'a Graph,
            node_ok: &'a NodePredicate<'a>,
        ) -> Box<dyn Iterator<Item = Mapping> + 'a> {
            let inner = self.inner.candidates(pattern, graph, node_ok);
            Box::new(inner.inspect(move |_| {
                self.pulled.set(self.pulled.get() + 1);
                if self.pulled.get() == self.after {
                    self.token.cancel();
                }
            }))
        }
    }

    #[test]
    fn test_cancellation_stops_pulling() {
        // GIVEN
        let host = clique(6).build().unwrap();
        let motif = path_of_three().build().unwrap();
        let token = CancelToken::new();
        let oracle = CancellingOracle {
            inner: BacktrackingMatcher::new(),
            token: token.clone(),
            after: 4,
            pulled: Cell::new(0),
        };
        let executor = Executor::new(host.graph()).with_oracle(&oracle);

        // WHEN
        let outcome = executor.find_outcome(&motif, None, Some(&token)).unwrap();

        // THEN - the candidate produced while cancelling is dropped
        assert_eq!(oracle.pulled.get(), 4);
        assert_eq!(outcome.mappings.len(), 3);
        assert_eq!(outcome.stats.pulled, 4);
        assert!(outcome.stats.cancelled);
    }
}

mod custom_oracles {
    use super::*;

    /// An oracle that never runs dry: it repeats one mapping forever.
    struct Endless {
        mapping: Mapping,
    }

    impl MatchOracle for Endless {
        fn candidates<'a>(
            &'a self,
            _pattern: &'a StructuralPattern,
            _graph: &'a Graph,
            _node_ok: &'a NodePredicate<'a>,
        ) -> Box<dyn Iterator<Item = Mapping> + 'a> {
            Box::new(std::iter::repeat(self.mapping.clone()))
        }
    }

    #[test]
    fn test_limit_terminates_unbounded_oracle() {
        let host = HostBuilder::directed()
            .edge("A", "B", attrs!())
            .build()
            .unwrap();
        let oracle = Endless {
            mapping: host.mapping(&[("x", "A"), ("y", "B")]).unwrap(),
        };
        let motif = Motif::builder().edge("x", "y").build().unwrap();
        let executor = Executor::new(host.graph()).with_oracle(oracle);

        assert_eq!(executor.count(&motif, Some(25)).unwrap(), 25);
    }

    #[test]
    fn test_constant_accept_oracle_under_default_config() {
        // GIVEN - an oracle that ignores the node predicate it is handed
        struct IgnoresPredicate(BacktrackingMatcher);

        fn accept_all(_: &str, _: NodeId) -> bool {
            true
        }
        const ACCEPT_ALL: &NodePredicate<'static> = &accept_all;

        impl MatchOracle for IgnoresPredicate {
            fn candidates<'a>(
                &'a self,
                pattern: &'a StructuralPattern,
                graph: &'a Graph,
                _node_ok: &'a NodePredicate<'a>,
            ) -> Box<dyn Iterator<Item = Mapping> + 'a> {
                self.0.candidates(pattern, graph, ACCEPT_ALL)
            }
        }

        let host = HostBuilder::directed()
            .node("A", attrs! { "type" => 1 })
            .node("B", attrs! { "type" => 2 })
            .node("C", attrs! { "type" => 1 })
            .edge("A", "B", attrs! { "weight" => 5 })
            .edge("B", "C", attrs! { "weight" => 5 })
            .build()
            .unwrap();
        let motif = Motif::builder()
            .edge("x", "y")
            .node_constraint("x", "type", Operator::Eq, 1)
            .edge_constraint("x", "y", "weight", Operator::Eq, 5)
            .build()
            .unwrap();

        // WHEN
        let executor =
            Executor::new(host.graph()).with_oracle(IgnoresPredicate(BacktrackingMatcher::new()));
        let found = executor.find(&motif, None).unwrap();

        // THEN - B -> C is offered but B has type 2
        assert_eq!(found, vec![host.mapping(&[("x", "A"), ("y", "B")]).unwrap()]);
        assert_eq!(executor.count(&motif, None).unwrap(), 1);

        let unpruned = Executor::with_config(
            host.graph(),
            ExecutorConfig::new().with_oracle_pruning(false),
        )
        .with_oracle(IgnoresPredicate(BacktrackingMatcher::new()));
        assert_eq!(unpruned.find(&motif, None).unwrap(), found);
    }

    #[test]
    fn test_structural_inconsistency_is_an_error() {
        let host = HostBuilder::directed()
            .node("A", attrs!())
            .node("B", attrs!())
            .build()
            .unwrap();
        // Claims an edge that the host does not have.
        let oracle = Endless {
            mapping: host.mapping(&[("x", "A"), ("y", "B")]).unwrap(),
        };
        let motif = Motif::builder()
            .edge("x", "y")
            .edge_constraint("x", "y", "w", Operator::Eq, 1)
            .build()
            .unwrap();
        let executor = Executor::new(host.graph()).with_oracle(oracle);

        let err = executor.find(&motif, Some(1)).unwrap_err();
        assert!(matches!(err, QueryError::Constraint(_)));
    }
}
