//! Conversion throughput benchmark.
//!
//! Compares validated and fast construction of a light from its wire dict,
//! plus the export path, using Criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Map, Value};
use ufp_data::models::Light;
use ufp_data::{ApiHandle, ConversionMode, ProtectObject};

fn light_wire() -> Map<String, Value> {
    json!({
        "modelKey": "light",
        "id": "6194b7a10083c603e700f3f2",
        "name": "Driveway",
        "type": "UP FloodLight",
        "mac": "E063DA0A6E3F",
        "host": "192.168.102.71",
        "upSince": 1699900000000u64,
        "uptime": 100000000,
        "lastSeen": 1700000000000u64,
        "hardwareRevision": "7",
        "firmwareVersion": "1.9.3",
        "isUpdating": false,
        "isSshEnabled": false,
        "state": "CONNECTED",
        "connectionHost": "192.168.102.1",
        "connectedSince": 1699900005000u64,
        "latestFirmwareVersion": "1.9.3",
        "firmwareBuild": "g990c553.210409.1124",
        "isAdopting": false,
        "isAdopted": true,
        "isAdoptedByOther": false,
        "isProvisioned": false,
        "isRebooting": false,
        "canAdopt": false,
        "isAttemptingToConnect": false,
        "isConnected": true,
        "wiredConnectionState": {"phyRate": 100},
        "lastMotion": 1699999000000u64,
        "isDark": false,
        "isPirMotionDetected": false,
        "isLightOn": false,
        "isLocating": false,
        "lightDeviceSettings": {
            "isIndicatorEnabled": false,
            "ledLevel": 6,
            "luxSensitivity": "medium",
            "pirDuration": 120000,
            "pirSensitivity": 46,
        },
        "lightOnSettings": {"isLedForceOn": false},
        "lightModeSettings": {"mode": "motion", "enableAt": "fulltime"},
        "camera": null,
        "isCameraPaired": false,
        "featureFlags": {"hasLed": true},
    })
    .as_object()
    .cloned()
    .unwrap()
}

fn bench_construct(c: &mut Criterion) {
    let wire = light_wire();

    let mut group = c.benchmark_group("from_unifi_dict");
    for mode in [ConversionMode::Fast, ConversionMode::Validated] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{mode:?}")), &wire, |b, w| {
            b.iter(|| {
                Light::from_unifi_dict_with(black_box(w.clone()), ApiHandle::none(), mode).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let light =
        Light::from_unifi_dict_with(light_wire(), ApiHandle::none(), ConversionMode::Fast).unwrap();

    c.bench_function("unifi_dict", |b| {
        b.iter(|| black_box(&light).unifi_dict(None).unwrap());
    });
}

fn bench_update(c: &mut Criterion) {
    let light =
        Light::from_unifi_dict_with(light_wire(), ApiHandle::none(), ConversionMode::Fast).unwrap();
    let delta = json!({"wiredConnectionState": {"phyRate": 1000}, "isLightOn": true})
        .as_object()
        .cloned()
        .unwrap();

    c.bench_function("update_from_unifi_dict", |b| {
        b.iter(|| {
            light
                .update_from_unifi_dict_with(black_box(delta.clone()), ConversionMode::Fast)
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_construct, bench_export, bench_update);
criterion_main!(benches);
