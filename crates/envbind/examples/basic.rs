//! Example: binding a nested configuration under a global prefix
//!
//! Run with missing vars to see the diagnostic:
//!   cargo run --package envbind --example basic
//!
//! Run with the required var set:
//!   `APP_NAME=svc APP_MONGO_HOST=db.internal cargo run --package envbind --example basic`

use std::time::Duration;

use envbind::{Binder, EnvBind};

#[derive(Debug, Default, EnvBind)]
struct Config {
    #[env(var = "NAME,required")]
    name: String,

    #[env(var = "WORKERS", default = "4")]
    workers: usize,

    #[env(var = "DEBUG", default = "false")]
    debug: bool,

    #[env(prefix = "MONGO_")]
    mongo: Mongo,
}

#[derive(Debug, Default, EnvBind)]
struct Mongo {
    #[env(var = "HOST", default = "localhost")]
    host: String,

    #[env(var = "PORT", default = "27017")]
    port: u16,

    #[env(var = "TIMEOUT", default = "13s")]
    timeout: Duration,
}

fn main() -> envbind::Result<()> {
    let mut binder = Binder::new();
    binder.set_prefix("APP_");

    let config: Config = binder.load()?;

    println!("Successfully loaded config!");
    println!("  APP_NAME          = {}", config.name);
    println!("  APP_WORKERS       = {} (default: 4)", config.workers);
    println!("  APP_DEBUG         = {} (default: false)", config.debug);
    println!("  APP_MONGO_HOST    = {}", config.mongo.host);
    println!("  APP_MONGO_PORT    = {}", config.mongo.port);
    println!("  APP_MONGO_TIMEOUT = {:?}", config.mongo.timeout);

    Ok(())
}
