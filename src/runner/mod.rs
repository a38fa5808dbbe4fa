pub mod parallel;
pub mod sequential;

pub use parallel::ParallelRunner;
pub use sequential::SequentialRunner;
