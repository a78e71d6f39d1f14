use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::Ident;

use crate::validate::Accepted;

/// The two declarations emitted next to the protected property.
pub struct PeerDeclarations {
    pub sync_handle: TokenStream,
    pub backing_field: TokenStream,
}

/// `<name>Queue`
pub fn queue_ident(name: &Ident) -> Ident {
    format_ident!("{}Queue", name)
}

/// `_<name>`
pub fn backing_ident(name: &Ident) -> Ident {
    format_ident!("_{}", name)
}

/// Label attached to the queue, visible in `Debug` output and trace events.
pub fn queue_label(name: &Ident) -> String {
    format!("Barrier Queue for {}", name.unraw())
}

pub fn generate(accepted: &Accepted) -> PeerDeclarations {
    let name = &accepted.name;
    let ty = &accepted.ty;
    let init = &accepted.init;
    let storage_attrs = &accepted.storage_attrs;
    let queue = queue_ident(name);
    let backing = backing_ident(name);
    let label = queue_label(name);

    let sync_handle = quote! {
        #[allow(non_upper_case_globals)]
        static #queue: barrier_protected::BarrierQueue = barrier_protected::BarrierQueue::new(#label);
    };

    let backing_field = quote! {
        #(#storage_attrs)*
        #[allow(non_upper_case_globals)]
        static #backing: barrier_protected::BarrierCell<'static, #ty> = barrier_protected::BarrierCell::new(&#queue, #init);
    };

    PeerDeclarations {
        sync_handle,
        backing_field,
    }
}
