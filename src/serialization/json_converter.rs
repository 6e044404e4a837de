// src/serialization/json_converter.rs
//
// Rationals travel as their display strings ("-3/4", "+inf"), polynomials as
// a list of coefficient strings lowest degree first, and factorizations as
// { "scalar": .., "factors": [..] }.

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, SerializeStruct, Serializer};
use std::fmt;

use crate::factor::ProductOfPolynomials;
use crate::polynomial::Polynomial;
use crate::rational::RationalNumber;

pub mod json_converters {
    use super::*;

    pub fn serialize_rational<S>(value: &RationalNumber, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize_rational<'de, D>(deserializer: D) -> Result<RationalNumber, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RationalVisitor;

        impl<'de> Visitor<'de> for RationalVisitor {
            type Value = RationalNumber;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a rational literal such as \"-3/4\" or \"+inf\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<RationalNumber, E>
            where
                E: de::Error,
            {
                value.parse().map_err(E::custom)
            }

            fn visit_i64<E>(self, value: i64) -> Result<RationalNumber, E>
            where
                E: de::Error,
            {
                Ok(RationalNumber::from_integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<RationalNumber, E>
            where
                E: de::Error,
            {
                Ok(RationalNumber::from_integer(value))
            }
        }

        deserializer.deserialize_any(RationalVisitor)
    }

    pub fn serialize_polynomial<S>(polynomial: &Polynomial, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(polynomial.len()))?;
        for coefficient in polynomial {
            seq.serialize_element(coefficient)?;
        }
        seq.end()
    }

    pub fn deserialize_polynomial<'de, D>(deserializer: D) -> Result<Polynomial, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PolynomialVisitor;

        impl<'de> Visitor<'de> for PolynomialVisitor {
            type Value = Polynomial;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of finite rational coefficients")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Polynomial, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let mut coefficients = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(coefficient) = seq.next_element::<RationalNumber>()? {
                    coefficients.push(coefficient);
                }
                Polynomial::new(coefficients).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_seq(PolynomialVisitor)
    }

    pub fn serialize_product<S>(product: &ProductOfPolynomials, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ProductOfPolynomials", 2)?;
        state.serialize_field("scalar", product.scalar())?;
        state.serialize_field("factors", product.factors())?;
        state.end()
    }

    pub fn deserialize_product<'de, D>(deserializer: D) -> Result<ProductOfPolynomials, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field { Scalar, Factors }

        struct ProductVisitor;

        impl<'de> Visitor<'de> for ProductVisitor {
            type Value = ProductOfPolynomials;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct ProductOfPolynomials")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<ProductOfPolynomials, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let scalar = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let factors = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(ProductOfPolynomials::with_factors(scalar, factors))
            }

            fn visit_map<V>(self, mut map: V) -> Result<ProductOfPolynomials, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut scalar = None;
                let mut factors = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Scalar => {
                            if scalar.is_some() {
                                return Err(de::Error::duplicate_field("scalar"));
                            }
                            scalar = Some(map.next_value()?);
                        }
                        Field::Factors => {
                            if factors.is_some() {
                                return Err(de::Error::duplicate_field("factors"));
                            }
                            factors = Some(map.next_value()?);
                        }
                    }
                }
                let scalar = scalar.ok_or_else(|| de::Error::missing_field("scalar"))?;
                let factors = factors.unwrap_or_default();
                Ok(ProductOfPolynomials::with_factors(scalar, factors))
            }
        }

        const FIELDS: &[&str] = &["scalar", "factors"];
        deserializer.deserialize_struct("ProductOfPolynomials", FIELDS, ProductVisitor)
    }
}

impl Serialize for RationalNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        json_converters::serialize_rational(self, serializer)
    }
}

impl<'de> Deserialize<'de> for RationalNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        json_converters::deserialize_rational(deserializer)
    }
}

impl Serialize for Polynomial {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        json_converters::serialize_polynomial(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Polynomial {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        json_converters::deserialize_polynomial(deserializer)
    }
}

impl Serialize for ProductOfPolynomials {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        json_converters::serialize_product(self, serializer)
    }
}

impl<'de> Deserialize<'de> for ProductOfPolynomials {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        json_converters::deserialize_product(deserializer)
    }
}
