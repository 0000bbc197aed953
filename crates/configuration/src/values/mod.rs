mod connection_info;
mod secret;

pub use connection_info::{Host, Port};
pub use secret::Secret;
