pub mod ad_star;
mod key;
mod shortest_path;

pub use ad_star::{ADStar, Improvement};
pub use key::Key;
pub use shortest_path::path_weight;
