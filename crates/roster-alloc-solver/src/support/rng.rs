// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Derives an independent deterministic RNG per optimization stage from a
/// single base seed.
///
/// Each stage gets its own stream so that, for instance, adding iterations
/// to the genetic stage does not shift the random sequence the annealing
/// stage sees. With an explicit base seed the whole run is reproducible;
/// without one the base is drawn from the thread RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSplitter {
    base: u64,
}

impl SeedSplitter {
    #[inline]
    pub fn new(base: u64) -> Self {
        Self { base }
    }

    pub fn from_entropy() -> Self {
        Self {
            base: rand::rng().random(),
        }
    }

    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// RNG for the stage at `index`. The mix keeps nearby indices far
    /// apart in seed space.
    pub fn stage(&self, index: u64) -> ChaCha8Rng {
        let mixed = self.base ^ index.rotate_left(17) ^ 0x9E37_79B1_85EB_CA87;
        ChaCha8Rng::seed_from_u64(mixed)
    }
}
