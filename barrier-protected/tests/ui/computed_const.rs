use barrier_protected::barrier_protected;

#[barrier_protected]
const FOO: i64 = 100;

fn main() {
    assert_eq!(FOO, 100);
}
