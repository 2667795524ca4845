#![no_std]

use core::cmp::Ordering;

use common_constants::{BPS, BPS_PRECISION, RAY_PRECISION, WAD, WAD_PRECISION};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `a * b / c`, rounded down.
    fn mul_div_floor(&self, a: &BigUint, b: &BigUint, c: &BigUint) -> BigUint {
        (a * b) / c
    }

    /// `a * b / c`, rounded up.
    fn mul_div_ceil(&self, a: &BigUint, b: &BigUint, c: &BigUint) -> BigUint {
        let product = a * b;
        let quotient = &product / c;
        if quotient.clone() * c == product {
            quotient
        } else {
            quotient + 1u64
        }
    }

    /// Portion of `amount` expressed by `bps`, rounded down.
    fn apply_bps(&self, amount: &BigUint, bps: usize) -> BigUint {
        self.mul_div_floor(amount, &BigUint::from(bps), &BigUint::from(BPS))
    }

    /// `amount` reduced by `bps`, rounded down.
    fn deduct_bps(&self, amount: &BigUint, bps: usize) -> BigUint {
        let remaining = BPS.saturating_sub(bps);
        self.mul_div_floor(amount, &BigUint::from(remaining), &BigUint::from(BPS))
    }

    fn saturating_sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a > b {
            a - b
        } else {
            BigUint::zero()
        }
    }

    fn mul_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let half_scaled = &scaled / &BigUint::from(2u64);

        let rounded_product = (product + half_scaled) / scaled;

        self.to_decimal(rounded_product, precision)
    }

    fn div_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = scaled_a.into_raw_units() * &scaled;
        let denominator = scaled_b.into_raw_units();

        let half_denominator = denominator / &BigUint::from(2u64);
        let rounded_quotient = (numerator + half_denominator) / denominator;

        self.to_decimal(rounded_quotient, precision)
    }

    fn to_decimal_wad(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn to_decimal_ray(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, RAY_PRECISION)
    }

    fn to_decimal_bps(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, BPS_PRECISION)
    }

    fn wad(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn to_decimal(
        self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn rescale_half_up(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let old_precision = value.scale();
        let raw_value = value.into_raw_units();

        match new_precision.cmp(&old_precision) {
            Ordering::Equal => value.clone(),
            Ordering::Less => {
                let precision_diff = old_precision - new_precision;
                let factor = BigUint::from(10u64).pow(precision_diff as u32);
                let half_factor = &factor / 2u64;

                let rounded_downscaled_value = (raw_value + &half_factor) / factor;
                ManagedDecimal::from_raw_units(rounded_downscaled_value, new_precision)
            },
            Ordering::Greater => value.rescale(new_precision),
        }
    }
}
