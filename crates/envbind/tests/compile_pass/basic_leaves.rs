//! Every built-in leaf type, with and without metadata.

use std::time::Duration;

use envbind::{Binder, EnvBind, MapProvider};

#[derive(Default, EnvBind)]
struct AllTypes {
    #[env(var = "I8", default = "-1")]
    i8_val: i8,
    #[env(var = "I16", default = "-1")]
    i16_val: i16,
    #[env(var = "I32", default = "-1")]
    i32_val: i32,
    #[env(var = "I64", default = "-1")]
    i64_val: i64,
    #[env(var = "ISIZE", default = "-1")]
    isize_val: isize,
    #[env(var = "U8", default = "1")]
    u8_val: u8,
    #[env(var = "U16", default = "1")]
    u16_val: u16,
    #[env(var = "U32", default = "1")]
    u32_val: u32,
    #[env(var = "U64", default = "1")]
    u64_val: u64,
    #[env(var = "USIZE", default = "1")]
    usize_val: usize,
    #[env(var = "F32", default = "1.5")]
    f32_val: f32,
    #[env(var = "F64", default = "1.5")]
    f64_val: f64,
    #[env(var = "BOOL", default = "true")]
    bool_val: bool,
    #[env(var = "STRING,required")]
    string_val: String,
    #[env(var = "required,DURATION")]
    duration_val: Duration,
    #[env(var = "QUALIFIED", default = "1s")]
    qualified: std::time::Duration,
}

fn main() {
    let provider = MapProvider::new()
        .with("STRING", "s")
        .with("DURATION", "2s");

    let mut all = AllTypes::default();
    Binder::new().parse_from(&provider, &mut all).unwrap();

    assert_eq!(all.i8_val + 1, 0);
    assert_eq!(all.u64_val, 1);
    assert!(all.bool_val);
    assert_eq!(all.string_val, "s");
    assert_eq!(all.duration_val, Duration::from_secs(2));
    assert_eq!(all.qualified, Duration::from_secs(1));
    let _ = (
        all.i16_val,
        all.i32_val,
        all.i64_val,
        all.isize_val,
        all.u8_val,
        all.u16_val,
        all.u32_val,
        all.usize_val,
        all.f32_val,
        all.f64_val,
    );
}
