use thiserror::Error;

use crate::ast::{canonical_name, is_bound_name, Binding, Term};

#[derive(Debug, Error)]
pub enum TermError {
    #[error("apply requires at least two arguments")]
    Arity,
    #[error("Cannot substitute a free variable with another free variable")]
    FreeVariableSubstitution,
}
pub type Result<T> = std::result::Result<T, TermError>;

/// Builds a left-associated chain of applications, so `apply([a, b, c])`
/// is `(a b) c` and renders as `a(b)(c)`. Fails with [`TermError::Arity`]
/// on fewer than two terms.
pub fn apply<I>(terms: I) -> Result<Term>
where
    I: IntoIterator,
    I::Item: Into<Term>,
{
    let mut terms = terms.into_iter().map(Into::into);
    let first: Term = terms.next().ok_or(TermError::Arity)?;
    let second: Term = terms.next().ok_or(TermError::Arity)?;
    let mut expr = Term::Apply(first.into(), second.into());
    for arg in terms {
        expr = Term::Apply(expr.into(), arg.into());
    }
    Ok(expr)
}

/// Binds the free variable `name` inside `body`: every free occurrence of
/// the name is rewritten into its marked (bound) form, and the result is
/// wrapped in an abstraction over that marked parameter.
///
/// A name that does not occur in `body` yields a vacuous binder; that is
/// not an error. (`abstract` is reserved in Rust, hence the long name.)
pub fn abstraction(name: &str, body: impl Into<Term>) -> Result<Term> {
    let raw = canonical_name(name, Binding::Free);
    let parameter = canonical_name(name, Binding::Bound);
    let body = substitute(&body.into(), &raw, &Term::bound_var(name))?;
    Ok(Term::Abs(parameter, body.into()))
}

/// Rewrites every free occurrence of `replace` in `expr` to `with`.
///
/// A binder whose own parameter equals `replace` shadows: substitution does
/// not descend past it. Rewriting a free occurrence into a *different* free
/// variable is refused, as that silently renames an external name; rewriting
/// into the same name or into any bound/compound term is allowed.
fn substitute(expr: &Term, replace: &str, with: &Term) -> Result<Term> {
    match expr {
        Term::Var(name) if name == replace => {
            if !is_bound_name(replace) {
                if let Term::Var(target) = with {
                    if !is_bound_name(target) && target != replace {
                        return Err(TermError::FreeVariableSubstitution);
                    }
                }
            }
            Ok(with.clone())
        }
        Term::Var(_) => Ok(expr.clone()),
        Term::Abs(param, _) if param == replace => Ok(expr.clone()),
        Term::Abs(param, body) => Ok(Term::Abs(
            param.clone(),
            substitute(body, replace, with)?.into(),
        )),
        Term::Apply(lhs, rhs) => Ok(Term::Apply(
            substitute(lhs, replace, with)?.into(),
            substitute(rhs, replace, with)?.into(),
        )),
    }
}
