#![allow(dead_code)]

use envbind::EnvBind;

#[derive(EnvBind)]
struct Marker;

fn main() {}
