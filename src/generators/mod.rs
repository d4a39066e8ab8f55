pub mod alphabet;
pub mod hasher;
pub mod memorable;
pub mod pin;
pub mod random;
pub mod traits;

pub use hasher::{SecretHasher, create_hasher};
pub use memorable::{MemorableOptions, MemorablePasswordGenerator};
pub use pin::PinGenerator;
pub use random::RandomPasswordGenerator;
pub use traits::SecretGenerator;
