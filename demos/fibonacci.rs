//! Computes F_n via the matrix-exponentiation identity
//!
//! ```text
//! [ 0 1 ] ^ n   [ F_{n-1}    F_n   ]
//! [ 1 1 ]     = [   F_n    F_{n+1} ]
//! ```
//!
//! walking the bits of `n` from the second-highest down to the lowest,
//! maintaining the invariant `(a0, a1) = (F_k, F_{k+1})` for the prefix of
//! bits consumed so far (spec §6).

use apm_bignum::BigInt;

fn fibonacci(n: u64) -> BigInt {
    if n <= 2 {
        return if n == 0 { BigInt::zero() } else { BigInt::from_u32(1) };
    }

    let mut a0 = BigInt::zero();
    let mut a1 = BigInt::from_u32(1);

    let highest_bit = 63 - n.leading_zeros();
    let mut k: u64 = 1 << (highest_bit - 1);
    while k != 0 {
        // Both ways use two squares, two adds, one multiply, one shift.
        let a = a0.lshift(1).add(&a1);
        let tmp = a1.sqr();
        let mut new_a0 = a0.sqr().add(&tmp);
        let mut new_a1 = a1.mul(&a);
        if k & n != 0 {
            std::mem::swap(&mut new_a0, &mut new_a1);
            new_a1 = new_a0.add(&new_a1);
        }
        a0 = new_a0;
        a1 = new_a1;
        k >>= 1;
    }
    a1
}

fn main() {
    let mut args = std::env::args();
    let _argv0 = args.next();
    let Some(arg) = args.next() else {
        eprintln!("usage: fibonacci <n>");
        std::process::exit(1);
    };
    let Ok(n) = arg.parse::<u64>() else {
        eprintln!("fibonacci: {arg:?} is not a valid index");
        std::process::exit(1);
    };
    if n == 0 {
        eprintln!("fibonacci: index must be nonzero");
        std::process::exit(1);
    }

    let fib = fibonacci(n);
    println!("Fib({n})={fib}");
}
