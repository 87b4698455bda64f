pub mod configure_topic_gate;
pub mod create_post;
pub mod update_post;

pub use configure_topic_gate::*;
pub use create_post::*;
pub use update_post::*;
