use std::fmt;
use std::rc::Rc;

pub type TermRef = Rc<Term>;

/// Prefix distinguishing a bound variable name from a free one.
pub const BOUND_MARKER: char = '*';

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Term {
    /// `x`
    Var(String),
    /// `λ*x. t` (the parameter carries the marker)
    Abs(String, TermRef),
    /// `t(t)`
    Apply(TermRef, TermRef),
}

/// Whether a variable name is marked as bound by an enclosing abstraction.
///
/// Boundness is a naming convention, not a scope table: a name is bound iff
/// it starts with [`BOUND_MARKER`] at the moment it is inspected.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Binding {
    #[default]
    Free,
    Bound,
}

/// Canonical form of a variable name: any pre-existing marker is stripped,
/// then exactly one marker is re-applied iff `binding` is `Bound`. Idempotent
/// and total on any string.
pub fn canonical_name(name: &str, binding: Binding) -> String {
    let stripped = name.strip_prefix(BOUND_MARKER).unwrap_or(name);
    match binding {
        Binding::Free => stripped.to_string(),
        Binding::Bound => format!("{BOUND_MARKER}{stripped}"),
    }
}

pub fn is_bound_name(name: &str) -> bool {
    name.starts_with(BOUND_MARKER)
}

impl Term {
    /// A free variable occurrence.
    pub fn var(name: &str) -> Self {
        Term::Var(canonical_name(name, Binding::Free))
    }

    /// A bound variable occurrence, marker applied.
    pub fn bound_var(name: &str) -> Self {
        Term::Var(canonical_name(name, Binding::Bound))
    }
}

impl From<&str> for Term {
    fn from(name: &str) -> Self {
        Term::var(name)
    }
}

impl From<String> for Term {
    fn from(name: String) -> Self {
        Term::var(&name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Marker included verbatim; display never strips it.
            Term::Var(name) => f.write_str(name),
            Term::Abs(param, body) => write!(f, "λ{param}.{body}"),
            Term::Apply(lhs, rhs) => write!(f, "{lhs}({rhs})"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn canonical_name_is_idempotent() {
        assert_eq!(canonical_name("x", Binding::Free), "x");
        assert_eq!(canonical_name("*x", Binding::Free), "x");
        assert_eq!(canonical_name("x", Binding::Bound), "*x");
        // Never doubles the marker.
        assert_eq!(canonical_name("*x", Binding::Bound), "*x");
    }

    #[test]
    fn conversions_yield_free_variables() {
        assert_eq!(Term::from("x"), Term::Var("x".to_string()));
        assert_eq!(Term::from("*x".to_string()), Term::Var("x".to_string()));
        assert_eq!(Term::bound_var("x"), Term::Var("*x".to_string()));
    }

    #[test]
    fn display_renders_each_node_kind() {
        let var = Term::var("x");
        assert_eq!(var.to_string(), "x");

        let abs = Term::Abs("*x".to_string(), Term::var("y").into());
        assert_eq!(abs.to_string(), "λ*x.y");

        let apply = Term::Apply(Term::var("f").into(), Term::var("x").into());
        assert_eq!(apply.to_string(), "f(x)");
    }

    #[test]
    fn display_is_stable() {
        let term = Term::Abs(
            "*f".to_string(),
            Term::Apply(Term::bound_var("f").into(), Term::var("x").into()).into(),
        );
        assert_eq!(term.to_string(), term.to_string());
    }
}
