pub mod corner;

pub use corner::CornerGreedySelector;
