mod branching_strategy;
mod index_order;
mod jeroslaw_wang;
mod naive;

pub use branching_strategy::BranchingStrategy;
pub use index_order::IndexOrderBranching;
pub use jeroslaw_wang::JeroslawWang;
pub use naive::NaiveBranching;
