use std::fmt;

use crate::headers::{HeaderWriter, ResponseHeader};

/// How htmx swaps the response into the page, see
/// <https://htmx.org/attributes/hx-swap/>.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapType {
    /// Replace the children of the target element.
    InnerHtml,
    /// Replace the target element itself.
    OuterHtml,
    /// Insert just before the target element.
    BeforeBegin,
    /// Insert ahead of the target's first child.
    AfterBegin,
    /// Insert after the target's last child.
    BeforeEnd,
    /// Insert just after the target element.
    AfterEnd,
    /// Remove the target element, ignoring the response body.
    Delete,
    /// Leave the page alone; out of band swaps still run.
    None,
}

impl SwapType {
    /// Overrides the swap for this response through `HX-Reswap`.
    pub fn apply<W: HeaderWriter + ?Sized>(&self, res: &mut W) {
        ResponseHeader::RESWAP.set(res, &self.to_string());
    }
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SwapType::InnerHtml => "innerHTML",
            SwapType::OuterHtml => "outerHTML",
            SwapType::BeforeBegin => "beforebegin",
            SwapType::AfterBegin => "afterbegin",
            SwapType::BeforeEnd => "beforeend",
            SwapType::AfterEnd => "afterend",
            SwapType::Delete => "delete",
            SwapType::None => "none",
        };
        f.write_str(value)
    }
}
