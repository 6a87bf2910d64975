#![allow(dead_code)]

use envbind::EnvBind;

#[derive(EnvBind)]
enum Mode { Fast, Slow }

fn main() {}
