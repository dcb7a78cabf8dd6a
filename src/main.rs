//! Builds a handful of untyped lambda-calculus terms with the term engine
//! and prints their canonical renderings to standard output.

use anyhow::Result;

mod ast;
mod engine;

use ast::Term;
use engine::{abstraction, apply};

// some variables
const X: &str = "x";
const Y: &str = "y";
const Z: &str = "z";
const W: &str = "w";
const F: &str = "f";

fn demo() -> Result<()> {
    // x(y)(z(w))
    println!("{}", apply(vec![Term::from(X), Y.into(), apply([Z, W])?])?);

    // f(x)
    println!("{}", apply([F, X])?);

    // λ*x.f(*x)
    println!("{}", abstraction(X, apply([F, X])?)?);

    // λ*f.*f(x)
    println!("{}", abstraction(F, apply([F, X])?)?);

    // x(λ*f.λ*x.*f(*x)(y))(z)(w)
    let nested = abstraction(F, abstraction(X, apply([F, X, Y])?)?)?;
    println!(
        "{}",
        apply(vec![Term::from(X), nested, Z.into(), W.into()])?
    );

    Ok(())
}

fn main() {
    if let Err(e) = demo() {
        eprintln!("Error: {e}");
    }
}
