use barrier_protected::barrier_protected;

#[barrier_protected(fast)]
static FOO: i64 = 0;

fn main() {
    assert_eq!(FOO, 0);
}
