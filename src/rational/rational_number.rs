// src/rational/rational_number.rs

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::Neg;
use std::str::FromStr;

use num::bigint::Sign;
use num::{BigInt, BigUint, Integer, One, Signed, Zero};

use crate::error::{AlgebraError, Result};

/// Exact fraction extended with `+inf` and `-inf`.
///
/// Finite values are kept in lowest terms with a positive denominator and the
/// sign held separately, so zero is never negative. Infinities carry
/// `numerator == 0, denominator == 1` and use `negative` for their sign.
#[derive(Clone, Debug)]
pub struct RationalNumber {
    numerator: BigUint,
    denominator: BigUint,
    negative: bool,
    infinite: bool,
}

impl RationalNumber {
    /// Builds `numerator / denominator` in lowest terms.
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(numerator: N, denominator: D) -> Result<Self> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        let negative = numerator.is_negative() != denominator.is_negative();
        Ok(Self::reduced(
            numerator.magnitude().clone(),
            denominator.magnitude().clone(),
            negative,
        ))
    }

    pub fn from_integer<N: Into<BigInt>>(value: N) -> Self {
        Self::from_signed(value.into(), BigUint::one())
    }

    pub fn zero() -> Self {
        Self::reduced(BigUint::zero(), BigUint::one(), false)
    }

    pub fn one() -> Self {
        Self::reduced(BigUint::one(), BigUint::one(), false)
    }

    pub fn positive_infinity() -> Self {
        RationalNumber {
            numerator: BigUint::zero(),
            denominator: BigUint::one(),
            negative: false,
            infinite: true,
        }
    }

    pub fn negative_infinity() -> Self {
        RationalNumber {
            negative: true,
            ..Self::positive_infinity()
        }
    }

    // Callers guarantee a non-zero denominator.
    fn reduced(numerator: BigUint, denominator: BigUint, negative: bool) -> Self {
        let divisor = numerator.gcd(&denominator);
        let numerator = numerator / &divisor;
        let denominator = denominator / &divisor;
        let negative = negative && !numerator.is_zero();
        RationalNumber {
            numerator,
            denominator,
            negative,
            infinite: false,
        }
    }

    fn from_signed(numerator: BigInt, denominator: BigUint) -> Self {
        let negative = numerator.is_negative();
        Self::reduced(numerator.magnitude().clone(), denominator, negative)
    }

    fn infinity(negative: bool) -> Self {
        if negative {
            Self::negative_infinity()
        } else {
            Self::positive_infinity()
        }
    }

    pub fn numerator(&self) -> &BigUint {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    pub fn is_zero(&self) -> bool {
        !self.infinite && self.numerator.is_zero()
    }

    pub fn is_one(&self) -> bool {
        !self.infinite && !self.negative && self.numerator.is_one() && self.denominator.is_one()
    }

    pub fn is_integer(&self) -> bool {
        !self.infinite && self.denominator.is_one()
    }

    /// The value as an integer, when it is a finite integer.
    pub fn to_integer(&self) -> Option<BigInt> {
        if self.is_integer() {
            Some(self.signed_numerator())
        } else {
            None
        }
    }

    /// Numerator carrying the sign of the value.
    pub fn signed_numerator(&self) -> BigInt {
        let sign = if self.negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, self.numerator.clone())
    }

    pub fn abs(&self) -> Self {
        RationalNumber {
            negative: false,
            ..self.clone()
        }
    }

    pub fn negate(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        RationalNumber {
            negative: !self.negative,
            ..self.clone()
        }
    }

    /// Multiplicative inverse. The inverse of an infinity is zero.
    pub fn reciprocal(&self) -> Result<Self> {
        if self.infinite {
            return Ok(Self::zero());
        }
        if self.numerator.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(RationalNumber {
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
            negative: self.negative,
            infinite: false,
        })
    }

    pub fn add(&self, other: &RationalNumber) -> Result<Self> {
        match (self.infinite, other.infinite) {
            (true, true) if self.negative != other.negative => {
                Err(AlgebraError::IndeterminateForm("inf + -inf"))
            }
            (true, _) => Ok(self.clone()),
            (false, true) => Ok(other.clone()),
            (false, false) => {
                // a/b + c/d = (a*d + c*b) / (b*d)
                let numerator = self.signed_numerator() * BigInt::from(other.denominator.clone())
                    + other.signed_numerator() * BigInt::from(self.denominator.clone());
                Ok(Self::from_signed(numerator, &self.denominator * &other.denominator))
            }
        }
    }

    pub fn subtract(&self, other: &RationalNumber) -> Result<Self> {
        if self.infinite && other.infinite && self.negative == other.negative {
            return Err(AlgebraError::IndeterminateForm("inf - inf"));
        }
        self.add(&other.negate())
    }

    pub fn multiply(&self, other: &RationalNumber) -> Result<Self> {
        if (self.is_zero() && other.infinite) || (other.is_zero() && self.infinite) {
            return Err(AlgebraError::IndeterminateForm("0 * inf"));
        }
        let negative = self.negative != other.negative;
        if self.infinite || other.infinite {
            return Ok(Self::infinity(negative));
        }
        Ok(Self::reduced(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
            negative,
        ))
    }

    pub fn divide(&self, other: &RationalNumber) -> Result<Self> {
        if self.infinite && other.infinite {
            return Err(AlgebraError::IndeterminateForm("inf / inf"));
        }
        if other.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        let negative = self.negative != other.negative;
        if self.infinite {
            return Ok(Self::infinity(negative));
        }
        if other.infinite {
            return Ok(Self::zero());
        }
        Ok(Self::reduced(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
            negative,
        ))
    }

    /// Raises to an integer power; negative exponents invert first.
    pub fn power(&self, exponent: i64) -> Result<Self> {
        if self.is_zero() && exponent == 0 {
            return Err(AlgebraError::IndeterminateForm("0^0"));
        }
        let odd = exponent.is_odd();
        if self.infinite {
            return match exponent.cmp(&0) {
                Ordering::Equal => Err(AlgebraError::IndeterminateForm("inf^0")),
                Ordering::Less => Ok(Self::zero()),
                Ordering::Greater => Ok(Self::infinity(self.negative && odd)),
            };
        }
        if exponent == 0 {
            return Ok(Self::one());
        }

        let magnitude = exponent.unsigned_abs() as usize;
        let (top, bottom) = if exponent > 0 {
            (&self.numerator, &self.denominator)
        } else {
            if self.numerator.is_zero() {
                return Err(AlgebraError::DivisionByZero);
            }
            (&self.denominator, &self.numerator)
        };

        // Powers of coprime integers stay coprime.
        Ok(RationalNumber {
            numerator: num::pow(top.clone(), magnitude),
            denominator: num::pow(bottom.clone(), magnitude),
            negative: self.negative && odd,
            infinite: false,
        })
    }

    /// In-place `self = self + other`.
    pub fn increment(&mut self, other: &RationalNumber) -> Result<()> {
        *self = self.add(other)?;
        Ok(())
    }

    /// Orders two values. Infinities of the same sign cannot be compared.
    pub fn compare_to(&self, other: &RationalNumber) -> Result<Ordering> {
        match (self.infinite, other.infinite) {
            (true, true) if self.negative == other.negative => Err(
                AlgebraError::IndeterminateForm("comparison of same-signed infinities"),
            ),
            (true, _) => Ok(if self.negative { Ordering::Less } else { Ordering::Greater }),
            (false, true) => Ok(if other.negative { Ordering::Greater } else { Ordering::Less }),
            (false, false) => {
                let left = self.signed_numerator() * BigInt::from(other.denominator.clone());
                let right = other.signed_numerator() * BigInt::from(self.denominator.clone());
                Ok(left.cmp(&right))
            }
        }
    }
}

impl PartialEq for RationalNumber {
    fn eq(&self, other: &RationalNumber) -> bool {
        if self.infinite || other.infinite {
            return self.infinite && other.infinite && self.negative == other.negative;
        }
        if self.numerator.is_zero() && other.numerator.is_zero() {
            return true;
        }
        self.numerator == other.numerator
            && self.denominator == other.denominator
            && self.negative == other.negative
    }
}

impl Eq for RationalNumber {}

impl Default for RationalNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for RationalNumber {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigInt> for RationalNumber {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl Neg for &RationalNumber {
    type Output = RationalNumber;

    fn neg(self) -> RationalNumber {
        self.negate()
    }
}

impl Neg for RationalNumber {
    type Output = RationalNumber;

    fn neg(self) -> RationalNumber {
        self.negate()
    }
}

impl Display for RationalNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.infinite {
            return write!(f, "{}inf", if self.negative { "-" } else { "+" });
        }
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for RationalNumber {
    type Err = AlgebraError;

    fn from_str(input: &str) -> Result<Self> {
        let text = input.trim().replace('−', "-");
        match text.as_str() {
            "inf" | "+inf" => return Ok(Self::positive_infinity()),
            "-inf" => return Ok(Self::negative_infinity()),
            _ => {}
        }

        let parse = |part: &str| {
            part.trim()
                .trim_start_matches('+')
                .parse::<BigInt>()
                .map_err(|_| AlgebraError::Parse(input.to_string()))
        };

        match text.split_once('/') {
            Some((top, bottom)) => Self::new(parse(top)?, parse(bottom)?),
            None => Ok(Self::from_integer(parse(&text)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> RationalNumber {
        RationalNumber::new(n, d).unwrap()
    }

    fn inf() -> RationalNumber {
        RationalNumber::positive_infinity()
    }

    fn neg_inf() -> RationalNumber {
        RationalNumber::negative_infinity()
    }

    #[test]
    fn test_new_reduces() {
        let half = r(2, 4);
        assert_eq!(half.numerator(), &BigUint::from(1u32));
        assert_eq!(half.denominator(), &BigUint::from(2u32));
        assert!(!half.is_negative());
    }

    #[test]
    fn test_new_sign_rules() {
        assert!(r(-1, 2).is_negative());
        assert!(r(1, -2).is_negative());
        assert!(!r(-1, -2).is_negative());
        assert!(!r(0, -7).is_negative());
        assert_eq!(r(0, -7), RationalNumber::zero());
    }

    #[test]
    fn test_new_zero_denominator() {
        assert_eq!(RationalNumber::new(1, 0), Err(AlgebraError::DivisionByZero));
    }

    #[test]
    fn test_reduction_invariance() {
        for k in [-6i64, -1, 2, 3, 17] {
            assert_eq!(r(3 * k, 7 * k), r(3, 7));
            assert_eq!(r(-5 * k, 4 * k), r(-5, 4));
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(r(2, 3), r(4, 6));
        assert_eq!(RationalNumber::one(), r(2, 2));
        assert_ne!(RationalNumber::one(), r(-1, 1));
        assert_eq!(inf(), inf());
        assert_ne!(inf(), neg_inf());
        assert_ne!(inf(), RationalNumber::zero());
    }

    #[test]
    fn test_add() {
        assert_eq!(r(2, 3).add(&r(1, 3)).unwrap(), RationalNumber::one());
        assert_eq!(r(1, 3).add(&r(1, 2)).unwrap(), r(5, 6));
        assert_eq!(r(-1, 2).add(&r(1, 2)).unwrap(), RationalNumber::zero());
        assert!(!r(-1, 2).add(&r(1, 2)).unwrap().is_negative());
    }

    #[test]
    fn test_add_infinities() {
        assert_eq!(inf().add(&inf()).unwrap(), inf());
        assert_eq!(neg_inf().add(&neg_inf()).unwrap(), neg_inf());
        assert_eq!(inf().add(&r(-1_000_000_000, 3)).unwrap(), inf());
        assert_eq!(r(5, 2).add(&neg_inf()).unwrap(), neg_inf());
        assert!(matches!(inf().add(&neg_inf()), Err(AlgebraError::IndeterminateForm(_))));
        assert!(matches!(neg_inf().add(&inf()), Err(AlgebraError::IndeterminateForm(_))));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(r(2, 3).subtract(&r(1, 3)).unwrap(), r(1, 3));
        assert_eq!(r(1, 3).subtract(&r(1, 3)).unwrap(), RationalNumber::zero());
        assert_eq!(r(1, 3).subtract(&r(1, 2)).unwrap(), r(-1, 6));
        assert_eq!(inf().subtract(&neg_inf()).unwrap(), inf());
        assert_eq!(r(1, 1).subtract(&inf()).unwrap(), neg_inf());
        assert!(matches!(inf().subtract(&inf()), Err(AlgebraError::IndeterminateForm(_))));
        assert!(matches!(neg_inf().subtract(&neg_inf()), Err(AlgebraError::IndeterminateForm(_))));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(r(2, 3).multiply(&r(1, 3)).unwrap(), r(2, 9));
        assert_eq!(r(1, 3).multiply(&r(-1, 2)).unwrap(), r(-1, 6));
        assert_eq!(r(-1, 2).multiply(&r(-1, 2)).unwrap(), r(1, 4));
        assert_eq!(inf().multiply(&neg_inf()).unwrap(), neg_inf());
        assert_eq!(r(-3, 1).multiply(&neg_inf()).unwrap(), inf());
        assert!(matches!(inf().multiply(&RationalNumber::zero()), Err(AlgebraError::IndeterminateForm(_))));
        assert!(matches!(RationalNumber::zero().multiply(&neg_inf()), Err(AlgebraError::IndeterminateForm(_))));
    }

    #[test]
    fn test_divide() {
        assert_eq!(r(2, 3).divide(&r(1, 3)).unwrap(), r(2, 1));
        assert_eq!(r(1, 3).divide(&r(-1, 2)).unwrap(), r(-2, 3));
        assert_eq!(r(-1, 2).divide(&r(-1, 2)).unwrap(), RationalNumber::one());
        assert_eq!(RationalNumber::one().divide(&RationalNumber::zero()), Err(AlgebraError::DivisionByZero));
        assert!(matches!(inf().divide(&inf()), Err(AlgebraError::IndeterminateForm(_))));
    }

    #[test]
    fn test_divide_with_infinity() {
        assert_eq!(r(7, 2).divide(&inf()).unwrap(), RationalNumber::zero());
        assert_eq!(inf().divide(&r(-7, 2)).unwrap(), neg_inf());
        assert_eq!(neg_inf().divide(&r(-7, 2)).unwrap(), inf());
        assert_eq!(inf().divide(&RationalNumber::zero()), Err(AlgebraError::DivisionByZero));
    }

    #[test]
    fn test_power() {
        assert_eq!(RationalNumber::one().power(1000).unwrap(), RationalNumber::one());
        assert_eq!(r(1, 3).power(-1).unwrap(), r(3, 1));
        assert_eq!(r(3, 5).power(4).unwrap(), r(81, 625));
        assert_eq!(r(-2, 3).power(3).unwrap(), r(-8, 27));
        assert_eq!(r(-2, 3).power(-2).unwrap(), r(9, 4));
        assert_eq!(r(5, 7).power(0).unwrap(), RationalNumber::one());
    }

    #[test]
    fn test_power_edge_cases() {
        assert!(matches!(RationalNumber::zero().power(0), Err(AlgebraError::IndeterminateForm(_))));
        assert!(matches!(inf().power(0), Err(AlgebraError::IndeterminateForm(_))));
        assert_eq!(RationalNumber::zero().power(-2), Err(AlgebraError::DivisionByZero));
        assert_eq!(RationalNumber::zero().power(3).unwrap(), RationalNumber::zero());
        assert_eq!(inf().power(-3).unwrap(), RationalNumber::zero());
        assert_eq!(neg_inf().power(3).unwrap(), neg_inf());
        assert_eq!(neg_inf().power(2).unwrap(), inf());
    }

    #[test]
    fn test_compare_to() {
        assert_eq!(r(1, 3).compare_to(&r(1, 2)).unwrap(), Ordering::Less);
        assert_eq!(r(2, 3).compare_to(&r(1, 2)).unwrap(), Ordering::Greater);
        assert_eq!(r(4, 6).compare_to(&r(2, 3)).unwrap(), Ordering::Equal);
        assert_eq!(r(-4, 1).compare_to(&r(1, 100)).unwrap(), Ordering::Less);
        assert_eq!(inf().compare_to(&neg_inf()).unwrap(), Ordering::Greater);
        assert_eq!(inf().compare_to(&r(1, 2)).unwrap(), Ordering::Greater);
        assert_eq!(neg_inf().compare_to(&r(1, 2)).unwrap(), Ordering::Less);
        assert_eq!(r(1, 2).compare_to(&inf()).unwrap(), Ordering::Less);
        assert_eq!(r(1, 2).compare_to(&neg_inf()).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_compare_same_signed_infinities_fails() {
        assert!(matches!(inf().compare_to(&inf()), Err(AlgebraError::IndeterminateForm(_))));
        assert!(matches!(neg_inf().compare_to(&neg_inf()), Err(AlgebraError::IndeterminateForm(_))));
    }

    #[test]
    fn test_increment() {
        let mut three_halves = r(3, 2);
        three_halves.increment(&r(3, 4)).unwrap();
        assert_eq!(three_halves, r(9, 4));

        let mut zero = RationalNumber::zero();
        zero.increment(&r(9, 4)).unwrap();
        assert_eq!(zero, r(9, 4));

        let mut infinity = inf();
        infinity.increment(&r(-1_000_000_000, 3)).unwrap();
        assert_eq!(infinity, inf());

        let mut value = r(1, 2);
        value.increment(&r(-1, 2)).unwrap();
        assert!(value.is_zero());
        assert!(!value.is_negative());
    }

    #[test]
    fn test_reciprocal_and_negate() {
        assert_eq!(r(-2, 5).reciprocal().unwrap(), r(-5, 2));
        assert_eq!(RationalNumber::zero().reciprocal(), Err(AlgebraError::DivisionByZero));
        assert_eq!(neg_inf().reciprocal().unwrap(), RationalNumber::zero());
        assert_eq!(-r(3, 4), r(-3, 4));
        assert!(!(-RationalNumber::zero()).is_negative());
        assert_eq!(-inf(), neg_inf());
        assert_eq!(r(-3, 4).abs(), r(3, 4));
    }

    #[test]
    fn test_integer_queries() {
        assert!(r(6, 3).is_integer());
        assert_eq!(r(-6, 3).to_integer(), Some(BigInt::from(-2)));
        assert_eq!(r(1, 3).to_integer(), None);
        assert_eq!(inf().to_integer(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(r(3, 1).to_string(), "3/1");
        assert_eq!(r(-2, 6).to_string(), "-1/3");
        assert_eq!(inf().to_string(), "+inf");
        assert_eq!(neg_inf().to_string(), "-inf");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("3/4".parse::<RationalNumber>().unwrap(), r(3, 4));
        assert_eq!(" -6/8 ".parse::<RationalNumber>().unwrap(), r(-3, 4));
        assert_eq!("+5".parse::<RationalNumber>().unwrap(), r(5, 1));
        assert_eq!("-inf".parse::<RationalNumber>().unwrap(), neg_inf());
        assert_eq!("inf".parse::<RationalNumber>().unwrap(), inf());
        assert_eq!("1/0".parse::<RationalNumber>(), Err(AlgebraError::DivisionByZero));
        assert!(matches!("x/2".parse::<RationalNumber>(), Err(AlgebraError::Parse(_))));
    }
}
