use tree_sitter::Node;

use crate::settings::{ChainPolicy, DepthCalculationStyle};
use crate::source::SourceFile;
use crate::utils_ast::NodeExt;

/// One member or subscript access, decomposed into its parts.
#[derive(Debug, Clone, Copy)]
pub struct Access<'t> {
    /// The member or subscript node itself.
    pub node: Node<'t>,
    /// The expression being accessed.
    pub object: Node<'t>,
    /// The property identifier (dot access) or the key expression
    /// (subscript access).
    pub property: Node<'t>,
    /// Bracket access (`a[k]`) vs. dot access (`a.k`).
    pub computed: bool,
}

impl<'t> Access<'t> {
    pub fn cast(node: Node<'t>) -> Option<Self> {
        match node.kind() {
            "member_expression" => Some(Access {
                node,
                object: node.child_by_field_name("object")?,
                property: node.child_by_field_name("property")?,
                computed: false,
            }),
            "subscript_expression" => Some(Access {
                node,
                object: node.child_by_field_name("object")?,
                property: node.child_by_field_name("index")?,
                computed: true,
            }),
            _ => None,
        }
    }

    /// Row of the accessor a line break would be inserted before: the
    /// property token for dot access, the opening bracket for subscripts.
    pub fn accessor_row(&self) -> usize {
        if self.computed {
            let mut cursor = self.node.walk();
            let children: Vec<Node> = self.node.children(&mut cursor).collect();
            for child in children {
                if child.kind() == "[" {
                    return child.start_position().row;
                }
            }
        }
        self.property.start_position().row
    }
}

/// How an access participates in its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// The access is part of method-call structure: its object is a call,
    /// or the access itself is the callee of one.
    MethodCall,
    /// A plain property access.
    Property,
}

/// One countable position in a chain.
#[derive(Debug, Clone, Copy)]
pub struct Link<'t> {
    pub access: Access<'t>,
    pub kind: LinkKind,
    /// Eligible for its own line-break report.
    pub reportable: bool,
    /// A bracket access the policy refuses to break. Suppressed links
    /// still count toward depth.
    pub suppressed: bool,
}

impl<'t> Link<'t> {
    fn new(access: Access<'t>, kind: LinkKind, policy: &ChainPolicy, source: &SourceFile) -> Self {
        let reportable = is_reportable(&access, policy, source);
        Link {
            access,
            kind,
            reportable,
            suppressed: access.computed && !reportable,
        }
    }

    /// The firing condition: the object's last token and the accessor share
    /// a physical source line. Chains already split are never touched.
    pub fn same_line(&self) -> bool {
        self.access.object.end_position().row == self.access.accessor_row()
    }
}

/// An ordered sequence of links, outer-to-inner, all sharing one terminal
/// base expression.
#[derive(Debug)]
pub struct Chain<'t> {
    pub links: Vec<Link<'t>>,
    /// Terminal base identifier, counted as one extra link when property
    /// accesses are included under whole-chain evaluation.
    pub base: Option<Node<'t>>,
}

impl<'t> Chain<'t> {
    pub fn len(&self) -> usize {
        self.links.len() + usize::from(self.base.is_some())
    }

    pub fn has_suppressed_link(&self) -> bool {
        self.links.iter().any(|link| link.suppressed)
    }

    pub fn has_same_line_link(&self) -> bool {
        self.links.iter().any(|link| link.same_line())
    }
}

/// Walks inward from `start` through contiguous call/member structure and
/// collects the countable links of the chain `start` belongs to.
///
/// Under per-line evaluation the walk stops at the first non-countable
/// position. Whole-chain evaluation keeps probing past non-countable plain
/// property accesses so that method links deeper in the chain still count,
/// and finally counts the base identifier itself when property accesses
/// are included.
pub fn extract<'t>(start: Node<'t>, policy: &ChainPolicy, source: &SourceFile) -> Chain<'t> {
    let whole_chain = policy.style == DepthCalculationStyle::All;
    let mut chain = Chain { links: Vec::new(), base: None };
    let mut current = start;

    loop {
        let node = current.skip_parens();

        if node.is_call() {
            match node.child_by_field_name("function") {
                Some(callee) => {
                    current = callee;
                    continue;
                }
                None => break,
            }
        }

        let Some(access) = Access::cast(node) else {
            if whole_chain
                && policy.include_properties
                && is_chain_base(node)
                && !chain.links.is_empty()
            {
                chain.base = Some(node);
            }
            break;
        };

        let kind = classify(&access);
        if is_countable(kind, policy) {
            chain.links.push(Link::new(access, kind, policy, source));
            current = access.object;
            continue;
        }

        if whole_chain && kind == LinkKind::Property {
            current = access.object;
            continue;
        }

        break;
    }

    chain
}

fn classify<'t>(access: &Access<'t>) -> LinkKind {
    if access.node.is_callee() || access.object.skip_parens().is_call() {
        LinkKind::MethodCall
    } else {
        LinkKind::Property
    }
}

fn is_countable(kind: LinkKind, policy: &ChainPolicy) -> bool {
    match kind {
        LinkKind::MethodCall => policy.include_method_calls,
        LinkKind::Property => policy.include_properties,
    }
}

fn is_reportable(access: &Access, policy: &ChainPolicy, source: &SourceFile) -> bool {
    if !access.computed {
        return true;
    }
    if policy.include_brackets {
        return true;
    }
    // `a['b']` is just the bracket spelling of a dot access.
    is_quoted_name(access.property, source)
}

fn is_chain_base(node: Node) -> bool {
    matches!(node.kind(), "identifier" | "this")
}

/// A string literal key that spells a plain identifier name.
fn is_quoted_name(key: Node, source: &SourceFile) -> bool {
    if key.kind() != "string" {
        return false;
    }
    let text = source.text(key);
    let quotes: &[char] = &['"', '\''];
    let inner = text
        .strip_prefix(quotes)
        .and_then(|t| t.strip_suffix(quotes))
        .unwrap_or("");

    let mut chars = inner.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
