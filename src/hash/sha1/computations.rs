//! SHA-1 round functions and block compression.
//!
//! The compression operates on an 80-word schedule: words `0..16` are the
//! message block, words `16..80` are expanded in place before the rounds run.

pub use super::K160;

#[inline(always)]
pub fn ch(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | ((!b) & d)
}

#[inline(always)]
pub fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
pub fn maj(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (b & d) | (c & d)
}

/// Stage function for round `i` (`0..80`).
#[inline(always)]
pub fn stage_fn(i: usize, b: u32, c: u32, d: u32) -> u32 {
    match i / 20 {
        0 => ch(b, c, d),
        2 => maj(b, c, d),
        _ => parity(b, c, d),
    }
}

/// Fills words `16..80` of the schedule from the 16 message words.
#[inline(always)]
pub fn expand(w: &mut [u32; 80]) {
    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }
}

#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u32; 5], w: &mut [u32; 80]) {
    expand(w);

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for i in 0..80 {
        let temp = a
            .rotate_left(5)
            .wrapping_add(stage_fn(i, b, c, d))
            .wrapping_add(e)
            .wrapping_add(w[i])
            .wrapping_add(K160[i / 20]);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u32; 5], w: &mut [u32; 80]) {
    expand(w);

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    macro_rules! R {
        ($f:ident, $k:expr, $i:expr) => {{
            let temp = a
                .rotate_left(5)
                .wrapping_add($f(b, c, d))
                .wrapping_add(e)
                .wrapping_add(w[$i])
                .wrapping_add($k);

            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }};
    }

    macro_rules! R5 {
        ($f:ident, $k:expr, $i:expr) => {{
            R!($f, $k, $i);
            R!($f, $k, $i + 1);
            R!($f, $k, $i + 2);
            R!($f, $k, $i + 3);
            R!($f, $k, $i + 4);
        }};
    }

    R5!(ch, K160[0], 0);
    R5!(ch, K160[0], 5);
    R5!(ch, K160[0], 10);
    R5!(ch, K160[0], 15);

    R5!(parity, K160[1], 20);
    R5!(parity, K160[1], 25);
    R5!(parity, K160[1], 30);
    R5!(parity, K160[1], 35);

    R5!(maj, K160[2], 40);
    R5!(maj, K160[2], 45);
    R5!(maj, K160[2], 50);
    R5!(maj, K160[2], 55);

    R5!(parity, K160[3], 60);
    R5!(parity, K160[3], 65);
    R5!(parity, K160[3], 70);
    R5!(parity, K160[3], 75);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
