pub mod seed;
pub mod stats;
pub mod tags;

pub use seed::handle_seed;
pub use stats::handle_stats;
pub use tags::handle_tags;
