use barrier_protected::barrier_protected;

#[barrier_protected]
fn foo() -> bool {
    true
}

fn main() {
    assert!(foo());
}
