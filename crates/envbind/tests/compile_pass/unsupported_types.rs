//! Fields without a conversion still compile and fail at bind time.

use envbind::{Binder, EnvBind, ErrorKind, MapProvider};

struct Opaque;

#[derive(EnvBind)]
struct Unsupported {
    #[env(var = "PAIR", default = "1,2")]
    pair: (f64, f64),

    #[env(var = "LIST")]
    list: Vec<String>,

    #[env(var = "OPAQUE")]
    opaque: Opaque,

    #[env(var = "MAYBE")]
    maybe: Option<u16>,

    untagged: char,
}

fn main() {
    let mut value = Unsupported {
        pair: (0.0, 0.0),
        list: Vec::new(),
        opaque: Opaque,
        maybe: None,
        untagged: ' ',
    };

    let err = Binder::new()
        .parse_from(&MapProvider::new(), &mut value)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedType);

    let _ = (value.pair, value.list, value.opaque, value.maybe, value.untagged);
}
