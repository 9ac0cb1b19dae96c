pub mod user;
pub mod envelopes;

pub use user::*;
pub use envelopes::*;
