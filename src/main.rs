// src/main.rs

use std::env;
use std::process;

use env_logger::Env;
use log::{debug, warn};

use ratpoly::config::{DisplayConfig, RatpolyConfig};
use ratpoly::{gcd, AlgebraError, Polynomial, ProductOfPolynomials, RationalFactoring, RationalNumber};

const USAGE: &str = "usage: ratpoly <command> [args]

coefficients are rational literals, lowest degree first

commands:
  factor c0 c1 ...            factor over the rationals
  gcd c0 c1 ... / d0 d1 ...   monic greatest common divisor
  divide c0 c1 ... / d0 ...   quotient and remainder
  eval x c0 c1 ...            value at x (x may be +inf or -inf)
  derive c0 c1 ...            derivative
  integrate c0 c1 ...         antiderivative with zero constant term";

fn main() {
    let config = RatpolyConfig::load().unwrap_or_else(|e| {
        eprintln!("ignoring invalid configuration: {}", e);
        RatpolyConfig::default()
    });

    let env = Env::default()
        .filter_or("RATPOLY_LOG", config.log_level.as_str())
        .write_style_or("RATPOLY_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        eprintln!("{}", USAGE);
        process::exit(1);
    };

    match run(command, rest, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(command: &str, args: &[String], config: &RatpolyConfig) -> Result<String, String> {
    debug!("running {} with {:?}", command, args);
    let display = &config.display;

    match command {
        "factor" => {
            let poly = parse_polynomial(args)?;
            let product = RationalFactoring::new(config.factor.clone())
                .factor(&poly)
                .map_err(|e| e.to_string())?;
            render_product(&product, display)
        }
        "gcd" => {
            let (left, right) = parse_pair(args)?;
            let result = gcd(&left, &right).map_err(|e| e.to_string())?;
            render_polynomial(&result, display)
        }
        "divide" => {
            let (dividend, divisor) = parse_pair(args)?;
            let result = dividend.quotient_remainder(&divisor).map_err(|e| e.to_string())?;
            if display.json {
                let value = serde_json::json!({
                    "quotient": result.quotient,
                    "remainder": result.remainder,
                });
                return serde_json::to_string_pretty(&value).map_err(|e| e.to_string());
            }
            Ok(format!(
                "quotient:\n{}\nremainder:\n{}",
                render_polynomial(&result.quotient, display)?,
                render_polynomial(&result.remainder, display)?
            ))
        }
        "eval" => {
            let (x, coefficients) = args.split_first().ok_or_else(|| USAGE.to_string())?;
            let x: RationalNumber = x.parse().map_err(|e: AlgebraError| e.to_string())?;
            let poly = parse_polynomial(coefficients)?;
            let value = poly.evaluate(&x).map_err(|e| e.to_string())?;
            if display.json {
                return serde_json::to_string(&value).map_err(|e| e.to_string());
            }
            Ok(value.to_string())
        }
        "derive" => {
            let poly = parse_polynomial(args)?;
            render_polynomial(&poly.derivative().map_err(|e| e.to_string())?, display)
        }
        "integrate" => {
            let poly = parse_polynomial(args)?;
            render_polynomial(&poly.integral().map_err(|e| e.to_string())?, display)
        }
        _ => {
            warn!("unknown command {}", command);
            Err(USAGE.to_string())
        }
    }
}

fn parse_polynomial(args: &[String]) -> Result<Polynomial, String> {
    if args.is_empty() {
        return Err("expected at least one coefficient".to_string());
    }
    let coefficients = args
        .iter()
        .map(|arg| arg.parse::<RationalNumber>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    Polynomial::new(coefficients).map_err(|e| e.to_string())
}

fn parse_pair(args: &[String]) -> Result<(Polynomial, Polynomial), String> {
    let split = args
        .iter()
        .position(|arg| arg == "/")
        .ok_or_else(|| "expected two polynomials separated by '/'".to_string())?;
    Ok((parse_polynomial(&args[..split])?, parse_polynomial(&args[split + 1..])?))
}

fn render_polynomial(poly: &Polynomial, display: &DisplayConfig) -> Result<String, String> {
    if display.json {
        return serde_json::to_string(poly).map_err(|e| e.to_string());
    }
    if display.stacked {
        return Ok(poly.render_stacked(&display.variable));
    }
    Ok(poly.render_one_line(&display.variable))
}

fn render_product(product: &ProductOfPolynomials, display: &DisplayConfig) -> Result<String, String> {
    if display.json {
        return serde_json::to_string_pretty(product).map_err(|e| e.to_string());
    }
    let mut lines = vec![format!("scalar: {}", product.scalar())];
    for factor in product {
        lines.push(render_polynomial(factor, display)?);
    }
    Ok(lines.join("\n"))
}
