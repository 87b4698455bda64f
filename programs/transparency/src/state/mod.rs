pub mod post;
pub mod topic_gate;

pub use post::*;
pub use topic_gate::*;
