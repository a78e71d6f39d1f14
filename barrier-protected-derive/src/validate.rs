use syn::{Attribute, Expr, Ident, Type, Visibility};

use crate::declaration::{DeclarationKind, DeclarationNode};
use crate::error::RejectionReason;
use crate::expand::ExpansionContext;

/// A declaration that passed every shape check, with everything the
/// generators need copied out of it.
#[derive(Debug, Clone)]
pub struct Accepted {
    pub name: Ident,
    pub ty: Type,
    pub init: Expr,
    pub vis: Visibility,
    /// Attributes for the accessor block.
    pub attrs: Vec<Attribute>,
    /// Linkage attributes that only make sense on the storage itself; they
    /// move to the backing static.
    pub storage_attrs: Vec<Attribute>,
}

const STORAGE_ATTRIBUTES: &[&str] = &["used", "no_mangle", "link_section", "export_name"];

/// `#[used]`, `#[no_mangle]`, `#[unsafe(no_mangle)]` and friends.
fn is_storage_attribute(attr: &Attribute) -> bool {
    let path = attr.path();
    if path.is_ident("unsafe") {
        return attr
            .parse_args::<syn::Path>()
            .or_else(|_| attr.parse_args::<syn::MetaNameValue>().map(|meta| meta.path))
            .is_ok_and(|inner| is_storage_path(&inner));
    }
    is_storage_path(path)
}

fn is_storage_path(path: &syn::Path) -> bool {
    STORAGE_ATTRIBUTES.iter().any(|name| path.is_ident(name))
}

pub type ValidationResult = Result<Accepted, RejectionReason>;

/// Classify `declaration`. Checks run in a fixed order and the first failure
/// wins, so the same input always reports the same reason.
pub fn validate<D>(declaration: &D, context: &ExpansionContext) -> ValidationResult
where
    D: DeclarationNode + ?Sized,
{
    let attribute = context.attribute();

    if declaration.kind() != DeclarationKind::Variable {
        return Err(RejectionReason::NotAVariable(attribute.to_owned()));
    }

    let bindings = declaration.bindings();
    if bindings.first().is_some_and(|b| b.has_accessor) {
        return Err(RejectionReason::HasExistingAccessor(attribute.to_owned()));
    }
    let Some(binding) = bindings.first() else {
        return Err(RejectionReason::NoBindingFound);
    };
    if bindings.len() > 1 {
        return Err(RejectionReason::MultipleBindings(attribute.to_owned()));
    }
    let Some(ty) = binding.ty else {
        return Err(RejectionReason::MissingTypeAnnotation(attribute.to_owned()));
    };
    let Some(init) = binding.init else {
        return Err(RejectionReason::MissingInitializer(attribute.to_owned()));
    };

    let (storage_attrs, attrs): (Vec<_>, Vec<_>) = declaration
        .attributes()
        .iter()
        .cloned()
        .partition(is_storage_attribute);

    Ok(Accepted {
        name: binding.pattern.clone(),
        ty: ty.clone(),
        init: init.clone(),
        vis: declaration
            .visibility()
            .cloned()
            .unwrap_or(Visibility::Inherited),
        attrs,
        storage_attrs,
    })
}
