use crate::domain::link::ID_LENGTH;
use crate::domain::ports::IdGenerator;
use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Random lowercase alphanumeric ids for mock links.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..ID_LENGTH)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect()
    }
}
