#![allow(dead_code)]

use envbind::EnvBind;

#[derive(EnvBind)]
struct Config {
    #[env(var = "PORT", colour = "red")]
    port: u16,
}

fn main() {}
