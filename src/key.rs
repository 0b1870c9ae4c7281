// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compact byte keys for canonical positions.
//!
//! Keys only serve as hash-set identities, so the packing just has to be
//! injective over positions with the same tube count and deterministic
//! across calls. The density depends on how many bits a color id needs:
//!
//! | colors   | bits per slot | layout                                      |
//! |----------|---------------|---------------------------------------------|
//! | `..=7`   | 3             | 12 bits per tube, streamed little-endian    |
//! | `8..=15` | 4             | two slots per byte                          |
//! | `16..`   | 8             | one raw byte per slot                       |

use std::fmt;

use crate::position::Position;

/// Largest color count packed at three bits per slot.
pub const MAX_COLORS_3_BIT: usize = 7;

/// Largest color count packed at four bits per slot.
pub const MAX_COLORS_4_BIT: usize = 15;

/// Byte identity of a canonical position.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(Box<[u8]>);

impl CanonicalKey {
    /// Encode `position`, choosing the tier from `num_colors`.
    pub fn new(position: &Position, num_colors: usize) -> Self {
        let bytes = if num_colors <= MAX_COLORS_3_BIT {
            pack_3_bit(position)
        } else if num_colors <= MAX_COLORS_4_BIT {
            pack_4_bit(position)
        } else {
            position
                .tubes()
                .iter()
                .flat_map(|tube| tube.slots().iter().copied())
                .collect()
        };
        Self(bytes.into_boxed_slice())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalKey(")?;
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

fn pack_3_bit(position: &Position) -> Vec<u8> {
    let mut bytes = Vec::with_capacity((position.num_tubes() * 12).div_ceil(8));
    let mut pending: u32 = 0;
    let mut bits = 0;
    for tube in position.tubes() {
        let [a, b, c, d] = tube.0.map(u32::from);
        pending |= (a << 9 | b << 6 | c << 3 | d) << bits;
        bits += 12;
        while bits >= 8 {
            bytes.push(pending as u8);
            pending >>= 8;
            bits -= 8;
        }
    }
    if bits > 0 {
        bytes.push(pending as u8);
    }
    bytes
}

fn pack_4_bit(position: &Position) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(position.num_tubes() * 2);
    for tube in position.tubes() {
        let [a, b, c, d] = *tube.slots();
        bytes.push(a << 4 | b);
        bytes.push(c << 4 | d);
    }
    bytes
}
