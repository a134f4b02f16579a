mod condition;
mod measurement;
mod merge;
mod store;
mod value;

pub use condition::*;
pub use measurement::*;
pub use merge::*;
pub use store::*;
pub use value::*;

#[cfg(test)]
pub(crate) use measurement::fixtures;
