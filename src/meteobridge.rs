mod builder;
mod decoder;
mod device;
mod error;
mod poller;
mod template;

pub use builder::*;
pub use decoder::*;
pub use device::*;
pub use error::*;
pub use poller::*;
pub use template::*;

#[cfg(test)]
pub(crate) use decoder::samples;
