// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use ballsort_census::position::{Position, Tube, EMPTY, TUBE_CAPACITY};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// A random valid position: each of `num_colors` colors appears exactly
/// four times, shuffled across `num_tubes` tubes and packed bottom-up.
pub fn random_position(rng: &mut StdRng, num_tubes: usize, num_colors: usize) -> Position {
    assert!(num_tubes >= num_colors);
    let mut units = vec![EMPTY; num_tubes * TUBE_CAPACITY];
    for color in 1..=num_colors {
        for slot in 0..TUBE_CAPACITY {
            units[(color - 1) * TUBE_CAPACITY + slot] = color as u8;
        }
    }
    units.shuffle(rng);

    let tubes = units
        .chunks(TUBE_CAPACITY)
        .map(|chunk| {
            let mut tube = Tube::empty();
            for (slot, &color) in chunk.iter().filter(|&&c| c != EMPTY).enumerate() {
                tube.0[slot] = color;
            }
            tube
        })
        .collect();
    Position::from_tubes(tubes)
}

/// Reorder tubes by `tube_order` and relabel colors by `colors`, where
/// original color `c` becomes `colors[c - 1]`. Empty stays empty.
pub fn permute(position: &Position, tube_order: &[usize], colors: &[u8]) -> Position {
    let tubes = tube_order
        .iter()
        .map(|&index| {
            let source = position.tubes()[index];
            Tube(source.0.map(|c| if c == EMPTY { EMPTY } else { colors[c as usize - 1] }))
        })
        .collect();
    Position::from_tubes(tubes)
}

/// Every permutation of `0..n`.
pub fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn extend(prefix: &mut Vec<usize>, remaining: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if remaining.is_empty() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..remaining.len() {
            let item = remaining.remove(i);
            prefix.push(item);
            extend(prefix, remaining, out);
            prefix.pop();
            remaining.insert(i, item);
        }
    }
    let mut out = Vec::new();
    extend(&mut Vec::new(), &mut (0..n).collect(), &mut out);
    out
}

/// Every relabeling of colors `1..=num_colors`, as `colors[c - 1]`.
pub fn color_relabelings(num_colors: usize) -> Vec<Vec<u8>> {
    permutations(num_colors)
        .into_iter()
        .map(|perm| perm.into_iter().map(|c| c as u8 + 1).collect())
        .collect()
}

/// Canonical form by exhaustion: try every relabeling and sort the tubes.
pub fn brute_force_canonical(position: &Position, num_colors: usize) -> Position {
    let identity: Vec<usize> = (0..position.num_tubes()).collect();
    color_relabelings(num_colors)
        .iter()
        .map(|colors| {
            let mut tubes = permute(position, &identity, colors).tubes().to_vec();
            tubes.sort();
            tubes
        })
        .min()
        .map(Position::from_tubes)
        .expect("at least one relabeling")
}
