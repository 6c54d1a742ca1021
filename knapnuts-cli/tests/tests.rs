#[cfg(test)]
mod tests {
    use clap::Parser;
    use knapnuts::knapsack::{Item, Strategy, classic_cakes};
    use knapnuts_cli::config::DemoConfig;
    use knapnuts_cli::demo::{format_sequence, run_knapsack, run_nuts_bolts};
    use knapnuts_cli::io::cli::{KnapsackCli, NutsBoltsCli};
    use test_case::test_case;

    #[test_case(10, 10; "ten")]
    #[test_case(30, 30; "thirty")]
    fn knapsack_classic(capacity: u64, expected: u64) {
        let output = run_knapsack(capacity, classic_cakes(), &DemoConfig::default()).unwrap();
        assert_eq!(output.results.len(), 3);
        assert!(output.results.iter().all(|r| r.value == expected));
    }

    #[test]
    fn knapsack_runs_configured_strategies_in_order() {
        let config = DemoConfig {
            strategies: vec![Strategy::GreedySort, Strategy::DynamicProgramming],
            ..DemoConfig::default()
        };
        let output = run_knapsack(7, classic_cakes(), &config).unwrap();
        let outcomes = output
            .results
            .iter()
            .map(|r| (r.strategy, r.value))
            .collect::<Vec<_>>();
        assert_eq!(
            outcomes,
            vec![(Strategy::GreedySort, 6), (Strategy::DynamicProgramming, 7)]
        );
    }

    #[test_case(1; "single pair")]
    #[test_case(10; "ten pairs")]
    #[test_case(10_000; "ten thousand pairs")]
    fn nuts_bolts_random_instance(n: usize) {
        let output = run_nuts_bolts(n, &DemoConfig::default()).unwrap();
        assert_eq!(output.after.nuts, output.after.bolts);
        assert_eq!(output.after.nuts, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn nuts_bolts_is_reproducible_with_seed() {
        let config = DemoConfig {
            prng_seed: Some(42),
            ..DemoConfig::default()
        };
        let first = run_nuts_bolts(100, &config).unwrap();
        let second = run_nuts_bolts(100, &config).unwrap();
        assert_eq!(first.before, second.before);
    }

    #[test]
    fn config_defaults_survive_json() {
        let config = DemoConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"greedy-pqueue\""));
        let parsed: DemoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let parsed: DemoConfig =
            serde_json::from_str(r#"{"prng_seed": null, "strategies": ["dp"]}"#).unwrap();
        assert_eq!(parsed.prng_seed, None);
        assert_eq!(parsed.strategies, vec![Strategy::DynamicProgramming]);
        assert_eq!(parsed.print_limit, DemoConfig::default().print_limit);
    }

    #[test]
    fn knapsack_cli_parses_items_and_strategies() {
        let cli = KnapsackCli::try_parse_from([
            "knapsack", "20", "7:160", "3:90", "2:15", "-s", "dp", "--strategy", "greedy-sort",
        ])
        .unwrap();
        assert_eq!(cli.capacity, 20);
        assert_eq!(
            cli.items,
            vec![
                Item::new(7, 160).unwrap(),
                Item::new(3, 90).unwrap(),
                Item::new(2, 15).unwrap()
            ]
        );
        assert_eq!(
            cli.strategies,
            vec![Strategy::DynamicProgramming, Strategy::GreedySort]
        );
    }

    #[test_case(&["knapsack", "-5"]; "negative capacity")]
    #[test_case(&["knapsack", "10", "0:4"]; "zero weight")]
    #[test_case(&["knapsack", "10", "4"]; "missing value")]
    #[test_case(&["knapsack", "10", "-s", "simplex"]; "unknown strategy")]
    fn knapsack_cli_rejects(args: &[&str]) {
        assert!(KnapsackCli::try_parse_from(args).is_err());
    }

    #[test]
    fn nuts_bolts_cli() {
        let cli = NutsBoltsCli::try_parse_from(["nutsbolts", "10", "-l", "debug"]).unwrap();
        assert_eq!(cli.n, 10);
        assert_eq!(cli.common.log_level, log::LevelFilter::Debug);
        assert!(NutsBoltsCli::try_parse_from(["nutsbolts"]).is_err());
    }

    #[test]
    fn sequences_are_truncated() {
        let seq = (0..10).collect::<Vec<_>>();
        assert_eq!(format_sequence(&seq, 10), "0 1 2 3 4 5 6 7 8 9");
        assert_eq!(format_sequence(&seq, 4), "0 1 ... 8 9");
        assert_eq!(format_sequence(&seq, 3), "0 1 ... 9");
        assert_eq!(format_sequence::<u8>(&[], 0), "");
    }
}
