/// A closed enum whose active variant can be named.
///
/// Usually implemented with `#[derive(Tagged)]`, which also generates one
/// `is_<variant>()` predicate per variant.
pub trait Tagged {
    /// Returns the tag of the active variant.
    fn tag(&self) -> &'static str;

    /// Returns every tag of the type, in declaration order.
    fn tags() -> &'static [&'static str];
}
