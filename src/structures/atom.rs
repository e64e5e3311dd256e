/*!
Atoms, aka. propositional 'variables'.

An atom is a non-empty, lowercase, string of ASCII alphanumerics and underscores.
Examples: `p`, `atom_one`, `96`, `0`.

Atoms are ordered lexicographically, and this ordering fixes the order in which literals are examined during [resolution](crate::structures::clause::Resolvent).
*/

/// An atom, aka. a 'variable'.
pub type Atom = String;

/// Whether `name` is an atom, once normalised.
///
/// ```rust
/// # use refute::structures::atom::is_atom;
/// assert!(is_atom("atom_one"));
/// assert!(!is_atom("~p"));
/// assert!(!is_atom(""));
/// ```
pub fn is_atom(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
