// tests/factoring_tests.rs
//
// Factorizations must multiply back to the polynomial they came from.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use ratpoly::config::FactorConfig;
use ratpoly::factor::eisenstein;
use ratpoly::{factor, Polynomial, ProductOfPolynomials, RationalFactoring, RationalNumber};

fn linear(constant: i64, slope: i64) -> Polynomial {
    Polynomial::from_integers(&[constant, slope])
}

fn assert_round_trip(poly: &Polynomial, product: &ProductOfPolynomials) {
    assert_eq!(&product.multiply_together().unwrap(), poly, "factorization {} of {}", product, poly);
}

#[cfg(test)]
mod factoring_tests {
    use super::*;

    #[test]
    fn test_product_of_linears_grid() {
        let _ = env_logger::builder().is_test(true).try_init();

        for i in -5..5 {
            for j in -5..5 {
                for k in -5..5 {
                    for l in -5..5 {
                        let poly = linear(i, j).multiply(&linear(k, l)).unwrap();
                        let product = factor(&poly).unwrap();
                        assert_round_trip(&poly, &product);

                        if poly.is_zero() {
                            assert!(product.scalar().is_zero());
                            continue;
                        }
                        // every factor of a product of linears is linear
                        for f in &product {
                            assert_eq!(f.degree().unwrap(), 1, "{} in {}", f, product);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_grid_without_eisenstein() {
        let slow = RationalFactoring::new(FactorConfig { eisenstein_fast_path: false });

        for i in -5..5 {
            for j in -5..5 {
                for k in -3..3 {
                    let poly = linear(i, j).multiply(&linear(k, 1)).unwrap();
                    assert_round_trip(&poly, &slow.factor(&poly).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_rational_roots_are_all_found() {
        // a lone linear factor passing Eisenstein would not be made monic
        let factoring = RationalFactoring::new(FactorConfig { eisenstein_fast_path: false });
        let mut rng = ChaCha8Rng::seed_from_u64(0xfac7);

        for _ in 0..50 {
            let count = rng.random_range(1..5);
            let roots: Vec<RationalNumber> = (0..count)
                .map(|_| {
                    let numerator: i64 = rng.random_range(-6..7);
                    let denominator: i64 = rng.random_range(1..5);
                    RationalNumber::new(numerator, denominator).unwrap()
                })
                .collect();
            let scale = RationalNumber::new(rng.random_range(1..9i64), rng.random_range(1..9i64)).unwrap();
            let poly = Polynomial::from_roots(&roots).unwrap().scale(&scale, 0).unwrap();

            let product = factoring.factor(&poly).unwrap();
            assert_round_trip(&poly, &product);
            assert_eq!(product.len(), roots.len(), "{} of {}", product, poly);
            assert_eq!(product.scalar(), &scale);
        }
    }

    #[test]
    fn test_irreducible_cofactor_is_kept_whole() {
        // (x - 2)(x^2 + x + 1)
        let poly = linear(-2, 1).multiply(&Polynomial::from_integers(&[1, 1, 1])).unwrap();
        let product = factor(&poly).unwrap();

        assert_round_trip(&poly, &product);
        assert_eq!(product.factors(), &[linear(-2, 1), Polynomial::from_integers(&[1, 1, 1])]);
    }

    #[test]
    fn test_eisenstein_polynomials_stay_whole() {
        for poly in [
            Polynomial::from_integers(&[2, 4, 6, 3]),
            Polynomial::from_integers(&[6, 2, 4, 5]),
            Polynomial::from_integers(&[-3, 0, 0, 0, 1]),
        ] {
            assert!(eisenstein(&poly).unwrap().is_some());
            let product = factor(&poly).unwrap();
            assert!(product.scalar().is_one());
            assert_eq!(product.factors(), &[poly.clone()]);
        }
    }

    #[test]
    fn test_json_output_round_trips() {
        let poly = Polynomial::from_ratios(&[(3, 2), (3, 1), (3, 2)]).unwrap();
        let product = factor(&poly).unwrap();

        let text = serde_json::to_string(&product).unwrap();
        let back: ProductOfPolynomials = serde_json::from_str(&text).unwrap();
        assert_eq!(back, product);
        assert_round_trip(&poly, &back);
    }
}
