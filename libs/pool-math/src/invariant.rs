use pool_types::MAX_ITERATIONS;
use soroban_sdk::{Env, Vec, U256};

/// Failure modes of the Newton solvers. Both solvers are pure functions of
/// their integer inputs and reproduce bit-for-bit across runs; a failure
/// here signals an extreme or adversarial funds configuration, never a
/// transient fault, so callers must not retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// The iteration did not settle within `MAX_ITERATIONS`, or an iterate
    /// left the region where the fixed-point form is defined.
    NonConvergence,
    /// A zero balance (or a degenerate asset set) leaves the invariant
    /// undefined.
    EmptyBalance,
    /// An intermediate or final value exceeded the representable range.
    Overflow,
}

/// Solve for the pool invariant D over the normalized funds `xp`.
///
/// Iterates `D_next = (Ann*S - D_P) / (Ann - 1)` from `D = S`, where
/// `D_P = D^(n+1) / (n^n * prod(xp))` and `Ann = amplitude * n^n`.
/// Converged when consecutive iterates differ by at most one unit.
pub fn solve_d(env: &Env, xp: &Vec<u128>, amplitude: u128) -> Result<u128, MathError> {
    let n = xp.len();
    if n < 2 {
        return Err(MathError::EmptyBalance);
    }
    // Zero amplitude makes the divisor Ann - 1 meaningless; no iteration
    // from such a configuration settles.
    if amplitude == 0 {
        return Err(MathError::NonConvergence);
    }

    let mut s: u128 = 0;
    for x in xp.iter() {
        if x == 0 {
            return Err(MathError::EmptyBalance);
        }
        s = s.checked_add(x).ok_or(MathError::Overflow)?;
    }

    let ann = amplitude
        .checked_mul(n_pow_n(n)?)
        .ok_or(MathError::Overflow)?;
    let ann_s = U256::from_u128(env, ann).mul(&U256::from_u128(env, s));
    let ann_less_one = U256::from_u128(env, ann - 1);
    let n_wide = U256::from_u32(env, n);

    let mut d = s;
    for _ in 0..MAX_ITERATIONS {
        let d_wide = U256::from_u128(env, d);
        // Accumulate D^(n+1) / (n^n * prod(xp)), dividing as we go so the
        // running product stays inside 256 bits.
        let mut d_p = d_wide.clone();
        for x in xp.iter() {
            let divisor = U256::from_u128(env, x).mul(&n_wide);
            d_p = checked_mul(env, &d_p, &d_wide)?.div(&divisor);
        }
        // The fixed-point form requires Ann*S >= D_P; an iterate past that
        // bound has escaped the basin of attraction.
        if d_p.gt(&ann_s) {
            return Err(MathError::NonConvergence);
        }
        let d_next = ann_s
            .sub(&d_p)
            .div(&ann_less_one)
            .to_u128()
            .ok_or(MathError::Overflow)?;
        if d.abs_diff(d_next) <= 1 {
            return Ok(d_next);
        }
        d = d_next;
    }
    Err(MathError::NonConvergence)
}

/// Solve for the implied balance y of the designated output asset, given
/// the invariant `d` and the normalized funds `xp` of every *other* asset
/// (the sold amount already added to the source entry by the caller).
///
/// Iterates `y_next = (y^2 + c) / (2y + b - D)` from `y = D`, with
/// `b = S' + D/Ann` and `c = D^(n+1) / (prod'(xp) * Ann * n^n)`.
pub fn solve_y(env: &Env, d: u128, xp: &Vec<u128>, amplitude: u128) -> Result<u128, MathError> {
    if xp.is_empty() || d == 0 {
        return Err(MathError::EmptyBalance);
    }
    if amplitude == 0 {
        return Err(MathError::NonConvergence);
    }
    let n = xp.len() + 1;

    let ann = amplitude
        .checked_mul(n_pow_n(n)?)
        .ok_or(MathError::Overflow)?;
    let d_wide = U256::from_u128(env, d);
    let n_wide = U256::from_u32(env, n);

    let mut s: u128 = 0;
    let mut c = d_wide.clone();
    for x in xp.iter() {
        if x == 0 {
            return Err(MathError::EmptyBalance);
        }
        s = s.checked_add(x).ok_or(MathError::Overflow)?;
        let divisor = U256::from_u128(env, x).mul(&n_wide);
        c = checked_mul(env, &c, &d_wide)?.div(&divisor);
    }
    let ann_n = U256::from_u128(env, ann).mul(&n_wide);
    c = checked_mul(env, &c, &d_wide)?.div(&ann_n);
    let b = s.checked_add(d / ann).ok_or(MathError::Overflow)?;

    let mut y = d;
    for _ in 0..MAX_ITERATIONS {
        let y_wide = U256::from_u128(env, y);
        let numerator = checked_add(env, &y_wide.mul(&y_wide), &c)?;
        let two_y_b = y
            .checked_mul(2)
            .and_then(|v| v.checked_add(b))
            .ok_or(MathError::Overflow)?;
        // The denominator 2y + b - D must stay positive; otherwise the
        // iterate has left the solution branch.
        if two_y_b <= d {
            return Err(MathError::NonConvergence);
        }
        let y_next = numerator
            .div(&U256::from_u128(env, two_y_b - d))
            .to_u128()
            .ok_or(MathError::Overflow)?;
        if y.abs_diff(y_next) <= 1 {
            return Ok(y_next);
        }
        y = y_next;
    }
    Err(MathError::NonConvergence)
}

fn n_pow_n(n: u32) -> Result<u128, MathError> {
    let mut out: u128 = 1;
    for _ in 0..n {
        out = out.checked_mul(n as u128).ok_or(MathError::Overflow)?;
    }
    Ok(out)
}

fn u256_max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

fn checked_mul(env: &Env, a: &U256, b: &U256) -> Result<U256, MathError> {
    let zero = U256::from_u32(env, 0);
    if a.eq(&zero) || b.eq(&zero) {
        return Ok(zero);
    }
    if a.gt(&u256_max(env).div(b)) {
        return Err(MathError::Overflow);
    }
    Ok(a.mul(b))
}

fn checked_add(env: &Env, a: &U256, b: &U256) -> Result<U256, MathError> {
    if a.gt(&u256_max(env).sub(b)) {
        return Err(MathError::Overflow);
    }
    Ok(a.add(b))
}
