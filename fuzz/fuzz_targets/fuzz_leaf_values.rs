#![no_main]

use std::time::Duration;

use envbind::{Binder, EnvBind, MapProvider};
use libfuzzer_sys::fuzz_target;

#[derive(Default, EnvBind)]
struct Leaves {
    #[env(var = "INT", default = "0")]
    int: i64,

    #[env(var = "UINT", default = "0")]
    uint: usize,

    #[env(var = "FLOAT", default = "0")]
    float: f32,

    #[env(var = "FLAG", default = "false")]
    flag: bool,

    #[env(var = "TEXT", default = "")]
    text: String,

    #[env(var = "SPAN", default = "0")]
    span: Duration,
}

fuzz_target!(|data: (u8, String)| {
    let (slot, value) = data;
    let key = ["INT", "UINT", "FLOAT", "FLAG", "TEXT", "SPAN"][usize::from(slot) % 6];

    // TEXT has no usable default, so it is always provided
    let provider = MapProvider::new().with("TEXT", "t").with(key, value.clone());
    let mut leaves = Leaves::default();

    if Binder::new().parse_from(&provider, &mut leaves).is_ok() && key == "TEXT" {
        assert_eq!(leaves.text, value);
    }
});
