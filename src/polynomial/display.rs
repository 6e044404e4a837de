// src/polynomial/display.rs
//
// Human-readable renderings. Both print each coefficient's magnitude and take
// the sign shown between two terms from the coefficient that follows it.

use std::fmt::{Display, Formatter};

use crate::polynomial::polynomial::Polynomial;

const FRACTION_BAR: char = '\u{2014}';

impl Polynomial {
    /// `c0 + c1*x - c2*x^2 ...` using coefficient magnitudes. Only a negative
    /// constant term carries its own sign.
    pub fn render_one_line(&self, variable: &str) -> String {
        let mut output = String::new();
        let coefficients = self.coefficients();

        if coefficients.first().map_or(false, |c| c.is_negative()) {
            output.push('-');
        }

        for (i, coefficient) in coefficients.iter().enumerate() {
            output += &coefficient.abs().to_string();
            match i {
                0 => {}
                1 => output += &format!("*{}", variable),
                _ => output += &format!("*{}^{}", variable, i),
            }

            if let Some(next) = coefficients.get(i + 1) {
                output += if next.is_negative() { " - " } else { " + " };
            }
        }
        output
    }

    /// Three rows: numerators, fraction bars with powers of the variable and
    /// signs, denominators. Each column is padded to line up across rows.
    pub fn render_stacked(&self, variable: &str) -> String {
        if self.is_null() {
            return "0".to_string();
        }

        let mut top = String::new();
        let mut middle = String::new();
        let mut bottom = String::new();
        let coefficients = self.coefficients();
        let last = coefficients.len() - 1;

        for (i, coefficient) in coefficients.iter().enumerate() {
            let numerator = coefficient.numerator().to_string();
            let denominator = coefficient.denominator().to_string();
            let width = numerator.len().max(denominator.len());
            let bar: String = std::iter::repeat(FRACTION_BAR).take(width).collect();
            let next_sign = coefficients
                .get(i + 1)
                .map(|next| if next.is_negative() { "-" } else { "+" });

            let gap = if i == 0 {
                3
            } else if i == 1 && i != last {
                5
            } else {
                6 + i.to_string().len()
            };

            if i == 0 && coefficient.is_negative() {
                top += "  ";
                middle += "- ";
                bottom += "  ";
            }

            top += &numerator;
            top += &" ".repeat(gap + width - numerator.len());
            bottom += &denominator;
            bottom += &" ".repeat(gap + width - denominator.len());

            middle += &bar;
            match i {
                // the constant column always carries a separator, blank when alone
                0 => middle += &format!(" {} ", next_sign.unwrap_or("")),
                1 => middle += &format!(" {}", variable),
                _ => middle += &format!(" {}^{}", variable, i),
            }
            match next_sign {
                Some(sign) if i > 0 => middle += &format!(" {} ", sign),
                _ => {}
            }
        }

        format!("{}\n{}\n{}", top, middle, bottom)
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_one_line("x"))
    }
}
