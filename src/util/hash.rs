use std::hash::{BuildHasher, Hash, Hasher};

/// A value with a hash chosen by the test, used to force collisions.
#[derive(Debug, Clone)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash {
            hash,
            value,
        }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

/// A hasher that reproduces the written `u64` unchanged, so bucket indices are predictable.
#[derive(Debug)]
pub struct BadHasher {
    state: u64,
}

impl Hasher for BadHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        let mut offset = 0_u64;
        for byte in bytes {
            self.state ^= (*byte as u64) << (offset * 8);
            offset = (offset + 1) % 8;
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct BadHasherBuilder;

impl BuildHasher for BadHasherBuilder {
    type Hasher = BadHasher;

    fn build_hasher(&self) -> Self::Hasher {
        BadHasher {
            state: 0
        }
    }
}

/// Hashes everything to the first byte written, so that single character strings end up in
/// alphabetical bucket order in a HashMap with enough capacity.
#[derive(Debug)]
pub struct FirstByteHasher {
    state: Option<u8>,
}

impl Hasher for FirstByteHasher {
    fn finish(&self) -> u64 {
        self.state.unwrap_or_default() as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.state.is_none() {
            self.state = bytes.first().copied();
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct FirstByteHasherBuilder;

impl BuildHasher for FirstByteHasherBuilder {
    type Hasher = FirstByteHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FirstByteHasher {
            state: None,
        }
    }
}
