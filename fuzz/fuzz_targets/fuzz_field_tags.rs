#![no_main]

use arbitrary::Arbitrary;
use envbind::{ErrorKind, FieldSpec, FieldTags, REQUIRED_MARKER};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    env: Option<String>,
    default: Option<String>,
}

fuzz_target!(|input: Input| {
    let mut tags = FieldTags::new("field");
    if let Some(env) = input.env.as_deref() {
        tags = tags.env(env);
    }
    if let Some(default) = input.default.as_deref() {
        tags = tags.default_value(default);
    }

    match FieldSpec::resolve(&tags) {
        Ok(spec) => {
            let env = input.env.as_deref().expect("resolved without metadata");
            let parts: Vec<&str> = env.split(',').collect();

            // The name is always one of the comma parts
            assert!(parts.contains(&spec.name()));
            assert!(parts.len() <= 2);

            // A two-part tag always carries the marker
            if parts.len() == 2 {
                assert!(parts.contains(&REQUIRED_MARKER));
                assert!(spec.is_marked_required());
            }

            // Required iff marked or no usable default
            let has_default = input.default.as_deref().is_some_and(|d| !d.is_empty());
            assert_eq!(spec.is_required(), spec.is_marked_required() || !has_default);
        }

        Err(err) => match input.env.as_deref() {
            None => assert_eq!(err.kind(), ErrorKind::NotProcessable),
            Some(_) => assert_eq!(err.kind(), ErrorKind::UnknownTagValue),
        },
    }
});
