pub mod channels;
pub mod normalize;

pub use channels::{Channel, classify};
pub use normalize::{Fixture, build_uid, normalize};
