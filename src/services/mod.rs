pub mod ranking;
pub mod recommendation;

pub use ranking::TOP_N;
