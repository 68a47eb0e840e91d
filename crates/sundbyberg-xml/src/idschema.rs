#![forbid(unsafe_code)]

//! Schema information about which attributes are of type ID.
//!
//! roxmltree does not expose attribute types, so the declarations are
//! collected from two places:
//!
//! - `<!ATTLIST element attribute ID ...>` in the internal DTD subset
//! - attribute names registered by the caller (e.g. `--id-attr`), which
//!   apply to every element

use sundbyberg_core::ns;

/// An `ID` attribute declaration.  Names may be prefixed (`wsu:Id`).
#[derive(Debug, Clone, PartialEq, Eq)]
struct IdAttrDecl {
    /// Element the declaration applies to, `None` for all elements.
    element: Option<String>,
    attribute: String,
}

/// The set of attributes declared to be of type ID.
#[derive(Debug, Clone, Default)]
pub struct IdSchema {
    decls: Vec<IdAttrDecl>,
}

impl IdSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the `ID` typed attributes declared in the internal DTD
    /// subset of a document prolog.
    ///
    /// `prolog` is the text before the root element.  Comments and
    /// processing instructions are skipped and scanning stops at the first
    /// element, so markup-like text in the document body is never read as
    /// a declaration.  Documents without an internal subset give an empty
    /// schema.
    pub fn from_prolog(prolog: &str) -> Self {
        let mut schema = Self::new();
        let Some(subset) = internal_subset(prolog) else {
            return schema;
        };
        for decl in markup_declarations(subset) {
            if let Some(body) = decl.strip_prefix("<!ATTLIST") {
                schema.parse_attlist(body);
            }
        }
        schema
    }

    /// Parse the body of one `<!ATTLIST ...>` declaration.
    fn parse_attlist(&mut self, body: &str) {
        let mut tokens = body.split_whitespace();
        let Some(element) = tokens.next() else {
            return;
        };

        while let Some(attribute) = tokens.next() {
            let Some(mut att_type) = tokens.next() else {
                break;
            };
            // Enumerated types may contain whitespace: `( a | b )`
            if att_type.starts_with('(') {
                while !att_type.ends_with(')') {
                    match tokens.next() {
                        Some(t) => att_type = t,
                        None => return,
                    }
                }
            }
            if att_type == "ID" {
                tracing::debug!(element, attribute, "DTD declares ID attribute");
                self.declare(element, attribute);
            }

            // Default declaration: #REQUIRED, #IMPLIED, #FIXED "v" or "v"
            let Some(mut default) = tokens.next() else {
                break;
            };
            if default == "#FIXED" {
                match tokens.next() {
                    Some(t) => default = t,
                    None => break,
                }
            }
            if let Some(quote) = default.chars().next().filter(|c| *c == '"' || *c == '\'') {
                let mut value = &default[1..];
                while !value.ends_with(quote) {
                    match tokens.next() {
                        Some(t) => value = t,
                        None => return,
                    }
                }
            }
        }
    }

    /// Declare `attribute` to be of type ID on elements named `element`.
    pub fn declare(&mut self, element: &str, attribute: &str) {
        let decl = IdAttrDecl {
            element: Some(element.to_owned()),
            attribute: attribute.to_owned(),
        };
        if !self.decls.contains(&decl) {
            self.decls.push(decl);
        }
    }

    /// Register `attribute` as being of type ID on every element.
    pub fn add_id_attr(&mut self, attribute: &str) {
        let decl = IdAttrDecl {
            element: None,
            attribute: attribute.to_owned(),
        };
        if !self.decls.contains(&decl) {
            self.decls.push(decl);
        }
    }

    /// Whether no ID attribute has been declared.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Check whether `attr` of `element` is declared to be of type ID.
    pub fn is_id_attribute(
        &self,
        element: roxmltree::Node<'_, '_>,
        attr: &roxmltree::Attribute<'_, '_>,
    ) -> bool {
        self.decls.iter().any(|decl| {
            let element_matches = match &decl.element {
                None => true,
                Some(name) => qname_matches(
                    element,
                    name,
                    element.tag_name().namespace(),
                    element.tag_name().name(),
                    false,
                ),
            };
            element_matches
                && qname_matches(element, &decl.attribute, attr.namespace(), attr.name(), true)
        })
    }
}

/// Return the text following `[` of the DOCTYPE in `prolog`, or `None` if
/// the prolog has no internal subset.
fn internal_subset(prolog: &str) -> Option<&str> {
    let mut rest = prolog.trim_start_matches('\u{feff}');
    loop {
        rest = rest.trim_start();
        if let Some(after) = rest.strip_prefix("<!--") {
            rest = &after[after.find("-->")? + 3..];
        } else if let Some(after) = rest.strip_prefix("<?") {
            rest = &after[after.find("?>")? + 2..];
        } else if let Some(after) = rest.strip_prefix("<!DOCTYPE") {
            // Root name and external id, then `[` or the closing `>`
            let open = find_unquoted(after, &['[', '>'])?;
            return after[open..].strip_prefix('[');
        } else {
            return None;
        }
    }
}

/// Split an internal subset into its markup declarations, up to the
/// closing `]`.  Comments, processing instructions and parameter entity
/// references are skipped.
fn markup_declarations(subset: &str) -> Vec<&str> {
    let mut decls = Vec::new();
    let mut rest = subset;
    loop {
        rest = rest.trim_start();
        if rest.is_empty() || rest.starts_with(']') {
            break;
        }
        let (skip_to, terminator) = if rest.starts_with("<!--") {
            (4, "-->")
        } else if rest.starts_with("<?") {
            (2, "?>")
        } else if rest.starts_with('<') {
            match find_unquoted(rest, &['>']) {
                Some(end) => {
                    decls.push(&rest[..end]);
                    rest = &rest[end + 1..];
                }
                None => break,
            }
            continue;
        } else {
            let len = rest.chars().next().map_or(1, char::len_utf8);
            rest = &rest[len..];
            continue;
        };
        match rest[skip_to..].find(terminator) {
            Some(end) => rest = &rest[skip_to + end + terminator.len()..],
            None => break,
        }
    }
    decls
}

/// Byte offset of the first of `stops` that is not inside a quoted literal.
fn find_unquoted(text: &str, stops: &[char]) -> Option<usize> {
    let mut quote = None;
    for (pos, c) in text.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if stops.contains(&c) => return Some(pos),
            None => {}
        }
    }
    None
}

/// Compare a declared, possibly prefixed, name against a namespace-resolved
/// name.  Prefixes are resolved against the in-scope bindings of `scope`.
fn qname_matches(
    scope: roxmltree::Node<'_, '_>,
    declared: &str,
    ns_uri: Option<&str>,
    local: &str,
    is_attribute: bool,
) -> bool {
    let (prefix, declared_local) = match declared.split_once(':') {
        Some((prefix, declared_local)) => (Some(prefix), declared_local),
        None => (None, declared),
    };
    if declared_local != local {
        return false;
    }
    let declared_ns = match prefix {
        Some("xml") => Some(ns::XML),
        Some(prefix) => match scope.lookup_namespace_uri(Some(prefix)) {
            Some(uri) => Some(uri),
            None => return false,
        },
        // Unprefixed attribute names carry no namespace; unprefixed element
        // names are in the default namespace, if any.
        None if is_attribute => None,
        None => scope.lookup_namespace_uri(None),
    };
    declared_ns == ns_uri
}
