//! Property-based tests for key resolution and file round-trips.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::env::env_key;
use crate::fs::MemFs;
use crate::store::ConfigStore;
use crate::value::{Mapping, Value};

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.]{0,12}"
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        any::<bool>().prop_map(Value::Bool),
        "[a-z][a-z0-9 _-]{0,15}".prop_map(Value::String),
    ]
}

fn settings_strategy() -> impl Strategy<Value = Mapping> {
    prop::collection::btree_map(key_strategy(), scalar_strategy(), 0..12)
}

fn isolated_store() -> ConfigStore {
    ConfigStore::new().with_env(HashMap::<String, String>::new())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // Set followed by Get returns the same value when no other tier is bound
    #[test]
    fn set_then_get_returns_value(key in key_strategy(), value in scalar_strategy()) {
        let mut store = isolated_store();
        store.set(key.clone(), value.clone());
        prop_assert_eq!(store.get(&key), Some(value));
    }

    // A non-empty flag always beats settings and environment
    #[test]
    fn non_empty_flag_always_wins(
        key in key_strategy(),
        flag in "[a-z0-9]{1,10}",
        setting in scalar_strategy(),
        env_val in "[a-z0-9]{1,10}"
    ) {
        let mut env = HashMap::new();
        env.insert(env_key(&key, "APP"), env_val);

        let mut flags = HashMap::new();
        flags.insert(key.clone(), flag.clone());

        let mut store = ConfigStore::new().with_env(env);
        store.set_env_prefix("app");
        store.automatic_env();
        store.set(key.clone(), setting);
        store.bind_flags(flags);

        prop_assert_eq!(store.get_string(&key), flag);
    }

    // Environment names never contain dots or lowercase letters
    #[test]
    fn env_key_is_upper_snake(key in key_strategy(), prefix in "[A-Z]{0,5}") {
        let name = env_key(&key, &prefix);
        prop_assert!(!name.contains('.'));
        prop_assert_eq!(name.to_uppercase(), name.clone());
        if prefix.is_empty() {
            prop_assert_eq!(name.len(), key.len());
        } else {
            let expected_prefix = format!("{prefix}_");
            prop_assert!(name.starts_with(&expected_prefix));
        }
    }

    // Writing then reading through either codec reproduces the settings
    #[test]
    fn write_then_read_round_trips(
        settings in settings_strategy(),
        config_type in prop_oneof![Just("json"), Just("yaml")],
    ) {
        let fs = MemFs::new();

        let mut writer = isolated_store().with_fs(fs.clone());
        writer.set_config_name("config");
        writer.set_config_type(config_type);
        writer.add_config_path("conf");
        for (k, v) in &settings {
            writer.set(k.clone(), v.clone());
        }
        writer.write_config().unwrap();

        let mut reader = isolated_store().with_fs(fs);
        reader.set_config_name("config");
        reader.set_config_type(config_type);
        reader.add_config_path("conf");
        reader.read_in_config().unwrap();

        prop_assert_eq!(reader.all_settings(), &settings);
    }
}
