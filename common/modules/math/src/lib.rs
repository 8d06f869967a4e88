#![no_std]

multiversx_sc::imports!();

/// out = (min_out * (max_in - current_in) + max_out * (current_in - min_in)) / (max_in - min_in)
/// https://en.wikipedia.org/wiki/Linear_interpolation
pub fn linear_interpolation<M, T>(min_in: T, max_in: T, current_in: T, min_out: T, max_out: T) -> T
where
    M: ManagedTypeApi,
    T: Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T> + PartialOrd + Clone,
{
    if current_in < min_in || current_in > max_in {
        M::error_api_impl().signal_error(b"Invalid values");
    }

    let min_out_weighted = min_out * (max_in.clone() - current_in.clone());
    let max_out_weighted = max_out * (current_in - min_in.clone());
    let in_diff = max_in - min_in;

    (min_out_weighted + max_out_weighted) / in_diff
}

/// Amount of `total` released at `current` by a schedule growing linearly from zero at
/// `start` to `total` at `end`. Values outside the window are clamped.
pub fn linear_release<M: ManagedTypeApi>(
    start: u64,
    end: u64,
    current: u64,
    total: &BigUint<M>,
) -> BigUint<M> {
    if current <= start {
        return BigUint::zero();
    }
    if current >= end {
        return total.clone();
    }

    linear_interpolation::<M, BigUint<M>>(
        BigUint::from(start),
        BigUint::from(end),
        BigUint::from(current),
        BigUint::zero(),
        total.clone(),
    )
}
