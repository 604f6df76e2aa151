pub mod achievement;
pub mod progress;
pub mod record;

pub use achievement::*;
pub use progress::*;
pub use record::*;
