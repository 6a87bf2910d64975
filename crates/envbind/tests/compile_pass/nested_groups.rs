//! Nested groups with and without a fragment, over several attributes.

use envbind::{Binder, EnvBind};

#[derive(Default, EnvBind)]
struct Database {
    #[env(var = "HOST", default = "localhost")]
    host: String,

    #[env(var = "PORT")]
    #[env(default = "5432")]
    port: u16,
}

#[derive(Default, EnvBind)]
struct Config {
    #[env(prefix = "DB_")]
    db: Database,

    #[env(nested, prefix = "REPLICA_")]
    replica: Database,

    #[env(nested)]
    shared: Database,
}

fn main() {
    let binder = Binder::with_prefix("COMPILE_PASS_");
    let config: Config = binder.load().unwrap_or_default();
    let _ = (config.db.host, config.replica.port, config.shared.port);
}
