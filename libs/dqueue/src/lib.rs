mod handle;
mod heap;
mod task;

// region:    --- Exports
pub use handle::DelayQueue;
pub use task::Task;
// endregion: --- Exports
