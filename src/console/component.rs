/// Something that can describe itself as console lines.
///
/// Components append to a shared buffer instead of returning their own
/// `Vec`, so a parent renders its children in place and line order always
/// follows model order.
pub trait Component {
    /// Append this component's lines to `lines`.
    fn render(&self, lines: &mut Vec<String>);
}
