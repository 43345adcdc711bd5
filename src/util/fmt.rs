use std::fmt::{self, Debug, Formatter};

/// Writes the wrapped string verbatim when debug formatted, so that pre-rendered pieces can be
/// placed inside [`Formatter::debug_list`] and friends.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Debug formats an iterator of items as a list, without collecting it first.
pub struct DebugList<I>(pub I);

impl<I> Debug for DebugList<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
