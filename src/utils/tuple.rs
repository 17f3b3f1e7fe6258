/// Count the slots of a tuple from the names of its type parameters.
///
/// Usable in const position: `const ARITY: usize = tuple_len!(A, B, C);`.
macro_rules! tuple_len {
    ($($C:ident),+ $(,)?) => {
        [$(stringify!($C)),+].len()
    };
}
pub(crate) use tuple_len;
