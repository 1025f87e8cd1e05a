//! Rendering rule trees to CSS text.

use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

use super::rule::{CNode, RuleBody};
use crate::error::StyleError;
use crate::theme::TokenValue;
use crate::util::kebab_case;

/// Shared environment for placeholder substitution. Undefined variables
/// render as empty strings, so an absent prefix leaves selectors unscoped.
static ENV: Lazy<Environment<'static>> = Lazy::new(Environment::new);

/// Substitutions applied while rendering a rule tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MountProps {
    /// Replaces the `{{ prefix }}` placeholder, e.g. `.n-`.
    #[serde(rename = "prefix", skip_serializing_if = "Option::is_none")]
    pub cls_prefix_selector: Option<String>,
}

impl MountProps {
    /// Props scoping block selectors under `.{prefix}-`.
    pub fn for_cls_prefix(prefix: &str) -> Self {
        Self {
            cls_prefix_selector: Some(format!(".{prefix}-")),
        }
    }
}

/// Renders rule roots to CSS text, applying `props` substitutions.
///
/// This is the pure half of mounting; it never touches the registry.
///
/// # Errors
///
/// Returns [`StyleError::Render`] when a selector or raw block is not a valid
/// template.
pub fn render_css(roots: &[CNode], props: &MountProps) -> Result<String, StyleError> {
    let mut out = String::new();
    for root in roots {
        render_node(root, &[], props, &mut out)?;
    }
    Ok(out)
}

fn render_node(
    node: &CNode,
    parents: &[String],
    props: &MountProps,
    out: &mut String,
) -> Result<(), StyleError> {
    if let Some(at_rule) = node.selectors.at_rule() {
        return render_at_rule(&substitute(at_rule, props)?, node, parents, props, out);
    }

    let own = node
        .selectors
        .parts()
        .into_iter()
        .map(|s| substitute(s, props))
        .collect::<Result<Vec<_>, _>>()?;
    let selectors = resolve_selectors(parents, &own);

    write_block(&selectors, &node.body, props, out)?;

    for child in &node.children {
        render_node(child, &selectors, props, out)?;
    }
    Ok(())
}

/// Wraps a node in its at-rule.
///
/// Inside the at-rule the node's declarations apply to the enclosing
/// selectors, or directly to the at-rule at the root (`@font-face`).
/// Children of `@keyframes` are frame selectors and never join the parents.
fn render_at_rule(
    at_rule: &str,
    node: &CNode,
    parents: &[String],
    props: &MountProps,
    out: &mut String,
) -> Result<(), StyleError> {
    let mut inner = String::new();
    if parents.is_empty() {
        for declaration in declarations(&node.body, props)? {
            inner.push_str(&declaration);
            inner.push('\n');
        }
    } else {
        write_block(parents, &node.body, props, &mut inner)?;
    }

    let scope: &[String] = if is_keyframes(at_rule) { &[] } else { parents };
    for child in &node.children {
        render_node(child, scope, props, &mut inner)?;
    }
    if inner.is_empty() {
        return Ok(());
    }

    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(at_rule);
    out.push_str(" {\n");
    for line in inner.lines() {
        if !line.is_empty() {
            out.push_str("  ");
            out.push_str(line);
        }
        out.push('\n');
    }
    out.push_str("}\n");
    Ok(())
}

fn is_keyframes(at_rule: &str) -> bool {
    at_rule
        .split_whitespace()
        .next()
        .is_some_and(|name| name.ends_with("keyframes"))
}

/// Expands child selectors against their parents.
fn resolve_selectors(parents: &[String], own: &[String]) -> Vec<String> {
    if own.is_empty() {
        return parents.to_vec();
    }
    if parents.is_empty() {
        return own
            .iter()
            .map(|s| s.replace('&', "").trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }

    let mut resolved = Vec::with_capacity(parents.len() * own.len());
    for parent in parents {
        for selector in own {
            if selector.contains('&') {
                resolved.push(selector.replace('&', parent));
            } else {
                resolved.push(format!("{parent} {selector}"));
            }
        }
    }
    resolved
}

fn write_block(
    selectors: &[String],
    body: &RuleBody,
    props: &MountProps,
    out: &mut String,
) -> Result<(), StyleError> {
    let declarations = declarations(body, props)?;
    if declarations.is_empty() || selectors.is_empty() {
        return Ok(());
    }

    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&selectors.join(",\n"));
    out.push_str(" {\n");
    for declaration in declarations {
        out.push_str("  ");
        out.push_str(&declaration);
        out.push('\n');
    }
    out.push_str("}\n");
    Ok(())
}

fn declarations(body: &RuleBody, props: &MountProps) -> Result<Vec<String>, StyleError> {
    Ok(match body {
        RuleBody::Empty => Vec::new(),
        RuleBody::Props(decls) => decls
            .iter()
            .map(|(name, value)| render_value(value, props).map(|v| format!("{}: {};", kebab_case(name), v)))
            .collect::<Result<Vec<_>, _>>()?,
        RuleBody::Raw(raw) => substitute(raw, props)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

fn render_value(value: &TokenValue, props: &MountProps) -> Result<String, StyleError> {
    match value {
        TokenValue::Text(text) => substitute(text, props),
        other => Ok(other.to_string()),
    }
}

fn substitute(source: &str, props: &MountProps) -> Result<String, StyleError> {
    if !source.contains("{{") && !source.contains("{%") {
        return Ok(source.to_string());
    }
    Ok(ENV.render_str(source, props)?)
}
