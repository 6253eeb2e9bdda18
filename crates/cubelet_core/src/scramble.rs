use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::{Face, Layer, Move, Sign};

/// Generates a random sequence of `len` face turns from `seed`.
///
/// The same seed always yields the same sequence. Consecutive moves never
/// share an axis, so no move partially cancels the one before it.
pub fn scramble(len: usize, seed: u64) -> Vec<Move> {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    let faces: Vec<Face> = Face::iter().collect();

    let mut ret: Vec<Move> = Vec::with_capacity(len);
    while ret.len() < len {
        let face = faces[rng.random_range(0..faces.len())];
        if ret.last().is_some_and(|prev| prev.axis() == face.axis()) {
            continue;
        }
        let layer = match face.sign() {
            Sign::Neg => Layer::NEG,
            Sign::Zero | Sign::Pos => Layer::POS,
        };
        let direction = i32::from(face.sign().int());
        let turns = match rng.random_range(0..3) {
            0 => direction,
            1 => -direction,
            _ => 2 * direction,
        };
        ret.extend(Move::new(face.axis(), layer, turns));
    }
    ret
}

/// Returns a seed for [`scramble()`] from the thread-local RNG.
pub fn random_seed() -> u64 {
    rand::rng().random()
}
