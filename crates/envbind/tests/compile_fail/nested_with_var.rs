#![allow(dead_code)]

use envbind::EnvBind;

struct Inner;

#[derive(EnvBind)]
struct Outer {
    #[env(nested, var = "INNER")]
    inner: Inner,
}

fn main() {}
