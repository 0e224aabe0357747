use cfg::Cfg;
use clap::Parser;

pub mod cfg;
mod demo;

fn main() {
    let cfg = cfg::Cfg::parse();
    println!("Running configuration:\n{cfg:#?}");

    let res = match cfg.mode {
        cfg::Mode::Demo => demo::run(),
        cfg::Mode::Stress => run_stress(cfg),
    };
    if let Err(e) = res {
        eprintln!("Error: {e:?}");
    }
}

fn run_stress(cfg: Cfg) -> anyhow::Result<()> {
    use dqueue::DelayQueue;
    use dqueue::test::stress::{StressTestConfig, run_stress_test};
    use std::sync::Arc;

    anyhow::ensure!(
        cfg.min_delay_ms < cfg.max_delay_ms,
        "min_delay_ms must be smaller than max_delay_ms"
    );

    let queue = Arc::new(DelayQueue::new());
    let config = StressTestConfig {
        num_producers: cfg.producer_num,
        num_tasks: cfg.task_num,
        num_consumers: cfg.consumer_num,
        payload_size_range: (256, 1_024),
        delay_range_ms: (cfg.min_delay_ms, cfg.max_delay_ms),
        poll_interval_ms: cfg.poll_interval_ms,
        run_duration_seconds: cfg.run_duration_seconds,
    };
    let results = run_stress_test(queue, config);

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        results.print_summary();
    }
    Ok(())
}
