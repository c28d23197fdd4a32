use criterion::{black_box, criterion_group, criterion_main, Criterion};
use layerconf::fs::MemFs;
use layerconf::ConfigStore;
use std::collections::HashMap;

fn populated_store() -> ConfigStore {
    let mut env = HashMap::new();
    env.insert("APP_DB_PORT".to_string(), "5432".to_string());

    let mut flags = HashMap::new();
    flags.insert("port".to_string(), "9000".to_string());

    let mut store = ConfigStore::new().with_fs(MemFs::new()).with_env(env);
    store.set_config_name("config");
    store.set_config_type("json");
    store.add_config_path("conf");
    store.set_env_prefix("app");
    store.automatic_env();
    store.bind_flags(flags);
    for i in 0..100 {
        store.set(format!("key{i}"), i);
    }
    store.set("name", "myapp");
    store
}

fn bench_get(c: &mut Criterion) {
    let store = populated_store();
    let mut group = c.benchmark_group("get");

    // Resolved by the flag tier
    group.bench_function("flag_tier", |b| {
        b.iter(|| store.get(black_box("port")));
    });

    // Resolved by the settings tier after a flag miss
    group.bench_function("settings_tier", |b| {
        b.iter(|| store.get(black_box("key50")));
    });

    // Resolved by the environment tier after two misses
    group.bench_function("env_tier", |b| {
        b.iter(|| store.get(black_box("db.port")));
    });

    // Missing everywhere
    group.bench_function("absent", |b| {
        b.iter(|| store.get(black_box("does.not.exist")));
    });

    group.bench_function("get_string", |b| {
        b.iter(|| store.get_string(black_box("name")));
    });

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");

    for config_type in ["json", "yaml"] {
        group.bench_function(config_type, |b| {
            b.iter(|| {
                let fs = MemFs::new();
                let mut store = populated_store().with_fs(fs.clone());
                store.set_config_type(config_type);
                store.write_config().unwrap();

                let mut reader = ConfigStore::new().with_fs(fs);
                reader.set_config_name("config");
                reader.set_config_type(config_type);
                reader.add_config_path("conf");
                reader.read_in_config().unwrap();
                black_box(reader.all_keys().len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_get, bench_round_trip);
criterion_main!(benches);
