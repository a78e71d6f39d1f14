use proc_macro::TokenStream;
use syn::{parse_macro_input, Item};

mod declaration;
mod error;
mod expand;
mod gen_accessors;
mod gen_peers;
mod validate;

/// Protect a `static` behind a readers-writer barrier queue.
///
/// Replaces `static NAME: T = init;` with a unit struct `NAME` whose `get`
/// takes shared access and whose `set` takes barrier (exclusive) access, plus
/// two module-private peers: the queue `NAMEQueue` and the backing cell
/// `_NAME`. See the `barrier-protected` crate for usage.
#[proc_macro_attribute]
pub fn barrier_protected(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as Item);
    expand::barrier_protected(attr.into(), item).into()
}
