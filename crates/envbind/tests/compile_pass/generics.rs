//! Generic structs forward their parameters and where-clauses.

use envbind::{Binder, EnvBind, FromEnv, MapProvider};

#[derive(Default, EnvBind)]
struct Inner {
    #[env(var = "NAME", default = "inner")]
    name: String,
}

#[derive(Default, EnvBind)]
struct Outer<G, L>
where
    G: EnvBind,
    L: FromEnv,
{
    #[env(prefix = "G_")]
    group: G,

    #[env(var = "LEAF", default = "7", from_env)]
    leaf: L,
}

fn main() {
    let mut outer: Outer<Inner, u32> = Outer::default();
    Binder::new()
        .parse_from(&MapProvider::new(), &mut outer)
        .unwrap();

    assert_eq!(outer.group.name, "inner");
    assert_eq!(outer.leaf, 7);
}
