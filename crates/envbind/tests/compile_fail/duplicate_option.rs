#![allow(dead_code)]

use envbind::EnvBind;

#[derive(EnvBind)]
struct Config {
    #[env(var = "PORT", var = "HTTP_PORT")]
    port: u16,
}

fn main() {}
