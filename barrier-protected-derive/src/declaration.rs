use syn::{Attribute, Expr, Ident, Item, Type, Visibility};

/// Coarse classification of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Variable,
    Function,
    Type,
    Other,
}

/// One name/type/initializer pairing inside a variable declaration.
#[derive(Debug, Clone, Copy)]
pub struct Binding<'a> {
    pub pattern: &'a Ident,
    pub ty: Option<&'a Type>,
    pub init: Option<&'a Expr>,
    /// The binding computes its value instead of storing it.
    pub has_accessor: bool,
}

/// Read-only view of a parsed declaration.
///
/// The validator only looks at a declaration through this trait, so it can be
/// driven by any parser that can answer these questions.
pub trait DeclarationNode {
    fn kind(&self) -> DeclarationKind;

    /// Bindings in declaration order. Empty for anything that is not a variable.
    fn bindings(&self) -> Vec<Binding<'_>>;

    /// `None` when the declaration has no visibility of its own.
    fn visibility(&self) -> Option<&Visibility>;

    fn attributes(&self) -> &[Attribute];
}

// A `static` is the Rust stored variable. A `const` has no storage: its value
// expression is inlined at every use, which makes it the computed property of
// this mapping.
impl DeclarationNode for Item {
    fn kind(&self) -> DeclarationKind {
        match self {
            Item::Static(_) | Item::Const(_) => DeclarationKind::Variable,
            Item::Fn(_) => DeclarationKind::Function,
            Item::Struct(_)
            | Item::Enum(_)
            | Item::Union(_)
            | Item::Type(_)
            | Item::Trait(_)
            | Item::TraitAlias(_) => DeclarationKind::Type,
            _ => DeclarationKind::Other,
        }
    }

    fn bindings(&self) -> Vec<Binding<'_>> {
        match self {
            Item::Static(item) => vec![Binding {
                pattern: &item.ident,
                ty: Some(&*item.ty),
                init: Some(&*item.expr),
                has_accessor: false,
            }],
            Item::Const(item) => vec![Binding {
                pattern: &item.ident,
                ty: Some(&*item.ty),
                init: Some(&*item.expr),
                has_accessor: true,
            }],
            _ => Vec::new(),
        }
    }

    fn visibility(&self) -> Option<&Visibility> {
        match self {
            Item::Const(item) => Some(&item.vis),
            Item::Enum(item) => Some(&item.vis),
            Item::ExternCrate(item) => Some(&item.vis),
            Item::Fn(item) => Some(&item.vis),
            Item::Mod(item) => Some(&item.vis),
            Item::Static(item) => Some(&item.vis),
            Item::Struct(item) => Some(&item.vis),
            Item::Trait(item) => Some(&item.vis),
            Item::TraitAlias(item) => Some(&item.vis),
            Item::Type(item) => Some(&item.vis),
            Item::Union(item) => Some(&item.vis),
            Item::Use(item) => Some(&item.vis),
            _ => None,
        }
    }

    fn attributes(&self) -> &[Attribute] {
        match self {
            Item::Const(item) => &item.attrs,
            Item::Enum(item) => &item.attrs,
            Item::ExternCrate(item) => &item.attrs,
            Item::Fn(item) => &item.attrs,
            Item::ForeignMod(item) => &item.attrs,
            Item::Impl(item) => &item.attrs,
            Item::Macro(item) => &item.attrs,
            Item::Mod(item) => &item.attrs,
            Item::Static(item) => &item.attrs,
            Item::Struct(item) => &item.attrs,
            Item::Trait(item) => &item.attrs,
            Item::TraitAlias(item) => &item.attrs,
            Item::Type(item) => &item.attrs,
            Item::Union(item) => &item.attrs,
            Item::Use(item) => &item.attrs,
            _ => &[],
        }
    }
}
