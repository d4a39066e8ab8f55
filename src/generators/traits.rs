use rand::RngCore;

/// A producer of one secret string per call.
///
/// Implementations hold only their construction-time configuration, so a
/// single instance can be shared between threads and called repeatedly.
pub trait SecretGenerator: Send + Sync {
    /// Draws a new secret from the supplied randomness source.
    fn generate_with(&self, rng: &mut dyn RngCore) -> String;

    /// Draws a new secret from the thread-local, OS-seeded generator returned
    /// by [`rand::rng`]. Each thread owns its own generator state, so this is
    /// safe to call concurrently.
    fn generate(&self) -> String {
        self.generate_with(&mut rand::rng())
    }
}
