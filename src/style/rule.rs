//! Rule trees: selectors, declaration blocks and nested rules.
//!
//! Rules are plain data. Building them never touches a document; see
//! [`mount`](crate::mount) for that.
//!
//! # Nesting
//!
//! A child selector containing `&` has every `&` replaced by the parent
//! selector; any other child selector is joined to the parent as a descendant.
//! Comma groups at any level expand to every parent/child combination.
//!
//! ```rust
//! use livery::{c, render_css, MountProps, Props};
//!
//! let tree = c("body", Props::new().set("margin", 0), [
//!     c("input", "font-family: inherit;", []),
//!     c("&.dark, &.dim", Props::new().set("backgroundColor", "#000"), []),
//! ]);
//!
//! let css = render_css(&[tree], &MountProps::default()).unwrap();
//! assert!(css.contains("body input {"));
//! assert!(css.contains("body.dark,\nbody.dim {"));
//! assert!(css.contains("background-color: #000;"));
//! ```

use crate::theme::TokenValue;

/// The class-prefix placeholder substituted at mount time.
pub const PREFIX: &str = "{{ prefix }}";

/// One or more selectors of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorList(Vec<String>);

impl SelectorList {
    /// Every selector of the list, with comma groups split apart.
    pub(crate) fn parts(&self) -> Vec<&str> {
        self.0
            .iter()
            .flat_map(|s| split_selector_group(s))
            .collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The at-rule prelude (`@media (max-width: 600px)`) when this list is
    /// a single at-rule rather than selectors. Commas in it are not split.
    pub(crate) fn at_rule(&self) -> Option<&str> {
        match self.0.as_slice() {
            [only] => Some(only.trim()).filter(|s| s.starts_with('@')),
            _ => None,
        }
    }
}

impl From<&str> for SelectorList {
    fn from(selector: &str) -> Self {
        SelectorList(vec![selector.to_string()])
    }
}

impl From<String> for SelectorList {
    fn from(selector: String) -> Self {
        SelectorList(vec![selector])
    }
}

impl From<Vec<&str>> for SelectorList {
    fn from(selectors: Vec<&str>) -> Self {
        SelectorList(selectors.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for SelectorList {
    fn from(selectors: Vec<String>) -> Self {
        SelectorList(selectors)
    }
}

impl<const N: usize> From<[&str; N]> for SelectorList {
    fn from(selectors: [&str; N]) -> Self {
        SelectorList(selectors.iter().map(|s| s.to_string()).collect())
    }
}

/// Splits `a, b:not(c, d)` on top-level commas only. Commas inside
/// parentheses, brackets or quoted strings stay put.
fn split_selector_group(group: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;
    for (i, ch) in group.char_indices() {
        if let Some(open) = quote {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                _ if ch == open => quote = None,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' | '\'' => quote = Some(ch),
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(group[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(group[start..].trim());
    parts.into_iter().filter(|p| !p.is_empty()).collect()
}

/// An ordered list of declarations.
///
/// Keys may be camelCase or kebab-case; they are written out in kebab-case.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Props(Vec<(String, TokenValue)>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration, returning the updated list for chaining.
    pub fn set<V: Into<TokenValue>>(mut self, name: &str, value: V) -> Self {
        self.0.push((name.to_string(), value.into()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The declaration block of a rule.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RuleBody {
    /// No declarations; the rule only scopes its children.
    #[default]
    Empty,
    Props(Props),
    /// A pre-formatted block such as `"margin: 0;\nfont-size: 14px;"`.
    Raw(String),
}

impl From<Props> for RuleBody {
    fn from(props: Props) -> Self {
        RuleBody::Props(props)
    }
}

impl From<&str> for RuleBody {
    fn from(raw: &str) -> Self {
        RuleBody::Raw(raw.to_string())
    }
}

impl From<String> for RuleBody {
    fn from(raw: String) -> Self {
        RuleBody::Raw(raw)
    }
}

impl From<()> for RuleBody {
    fn from(_: ()) -> Self {
        RuleBody::Empty
    }
}

/// A compiled rule node.
#[derive(Debug, Clone, PartialEq)]
pub struct CNode {
    pub(crate) selectors: SelectorList,
    pub(crate) body: RuleBody,
    pub(crate) children: Vec<CNode>,
}

impl CNode {
    pub fn selectors(&self) -> &SelectorList {
        &self.selectors
    }

    pub fn body(&self) -> &RuleBody {
        &self.body
    }

    pub fn children(&self) -> &[CNode] {
        &self.children
    }

    /// Appends more children, e.g. the output of a [`RuleFactory`].
    pub fn with_children<I: IntoIterator<Item = CNode>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }
}

/// Compiles a rule from selectors, a body and child rules.
pub fn c<S, B, I>(selectors: S, body: B, children: I) -> CNode
where
    S: Into<SelectorList>,
    B: Into<RuleBody>,
    I: IntoIterator<Item = CNode>,
{
    CNode {
        selectors: selectors.into(),
        body: body.into(),
        children: children.into_iter().collect(),
    }
}

/// A block rule scoped by the class prefix: `cb("button", ..)` matches
/// `.n-button` when mounted with prefix `n`.
pub fn cb<B, I>(block: &str, body: B, children: I) -> CNode
where
    B: Into<RuleBody>,
    I: IntoIterator<Item = CNode>,
{
    c(format!("{PREFIX}{block}"), body, children)
}

/// An element of the enclosing block: `ce("icon", ..)` is `&__icon`.
pub fn ce<B, I>(element: &str, body: B, children: I) -> CNode
where
    B: Into<RuleBody>,
    I: IntoIterator<Item = CNode>,
{
    c(format!("&__{element}"), body, children)
}

/// A modifier of the enclosing block: `cm("disabled", ..)` is `&--disabled`.
pub fn cm<B, I>(modifier: &str, body: B, children: I) -> CNode
where
    B: Into<RuleBody>,
    I: IntoIterator<Item = CNode>,
{
    c(format!("&--{modifier}"), body, children)
}

/// A reusable rule fragment parameterized by a config with defaults.
///
/// ```rust
/// use livery::{c, CNode, Props, RuleFactory};
///
/// #[derive(Default)]
/// struct Fade {
///     duration: Option<&'static str>,
/// }
///
/// const FADE: RuleFactory<Fade> = RuleFactory::new(|cfg| {
///     vec![c("&.fade-enter-active", Props::new().set("transition", cfg.duration.unwrap_or(".3s")), [])]
/// });
///
/// let slow: Vec<CNode> = FADE.instantiate(&Fade { duration: Some("1s") });
/// let normal = FADE.instantiate_default();
/// assert_eq!(slow[0].selectors(), normal[0].selectors());
/// assert_ne!(slow[0].body(), normal[0].body());
/// ```
pub struct RuleFactory<C> {
    build: fn(&C) -> Vec<CNode>,
}

impl<C> RuleFactory<C> {
    pub const fn new(build: fn(&C) -> Vec<CNode>) -> Self {
        Self { build }
    }

    pub fn instantiate(&self, config: &C) -> Vec<CNode> {
        (self.build)(config)
    }
}

impl<C: Default> RuleFactory<C> {
    pub fn instantiate_default(&self) -> Vec<CNode> {
        self.instantiate(&C::default())
    }
}

impl<C> std::fmt::Debug for RuleFactory<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleFactory").finish_non_exhaustive()
    }
}
