#![allow(dead_code)]

use envbind::EnvBind;

#[derive(EnvBind)]
struct Pair(u16, u16);

fn main() {}
