#[derive(Debug, Clone, clap::Parser)]
pub struct Cfg {
    /// What to run against the delayed-task queue.
    pub mode: Mode,
    /// Number of producers that will schedule tasks during a stress run.
    #[arg(short, long, default_value_t = 4)]
    pub producer_num: usize,
    /// Number of tasks each producer will schedule during the test.
    #[arg(short, long, default_value_t = 10_000)]
    pub task_num: usize,
    /// Number of consumers that will poll tasks from the queue.
    #[arg(short, long, default_value_t = 2)]
    pub consumer_num: usize,
    /// Delay between the start of each consumer poll.
    #[arg(long, default_value_t = 1)]
    pub poll_interval_ms: u64,
    /// Lower bound of the random execution delay assigned to each task.
    #[arg(long, default_value_t = 1)]
    pub min_delay_ms: u64,
    /// Upper bound of the random execution delay assigned to each task.
    #[arg(long, default_value_t = 500)]
    pub max_delay_ms: u64,
    // Hard cap on the test's execution time
    #[arg(long, default_value_t = 10)]
    pub run_duration_seconds: u64,
    /// Print the stress results as JSON instead of the text summary.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, strum::EnumString, clap::ValueEnum)]
pub enum Mode {
    #[strum(ascii_case_insensitive)]
    Demo,
    #[strum(ascii_case_insensitive)]
    Stress,
}
