//! Identifier sources for generated features.
use rand::RngCore;
use uuid::Builder;

/// Produces a fresh identifier for every generated feature.
///
/// The generator's random source is passed in so identifiers can be made
/// reproducible together with the coordinates.
pub trait IdSource {
    fn next_id(&mut self, rng: &mut dyn RngCore) -> String;
}

/// Random version 4 UUIDs drawn from the generator's random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuid;

impl IdSource for RandomUuid {
    fn next_id(&mut self, rng: &mut dyn RngCore) -> String {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid().to_string()
    }
}

/// Monotonic `"<prefix>-<n>"` identifiers, useful for fixtures.
#[derive(Debug, Clone)]
pub struct Sequential {
    prefix: String,
    next: u64,
}

impl Sequential {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl Default for Sequential {
    fn default() -> Self {
        Self::new("feature")
    }
}

impl IdSource for Sequential {
    fn next_id(&mut self, _rng: &mut dyn RngCore) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<T: IdSource + ?Sized> IdSource for &mut T {
    fn next_id(&mut self, rng: &mut dyn RngCore) -> String {
        (**self).next_id(rng)
    }
}
