use ssid_gbk::prelude::*;
use std::sync::Arc;
use std::thread;

const GBK: [u8; 4] = [0xD6, 0xD0, 0xB9, 0xFA];
const UTF: [u8; 6] = [0xE4, 0xB8, 0xAD, 0xE5, 0x9B, 0xBD];

#[test]
fn concurrent_init_and_convert() {
    let manager = Arc::new(SsidManager::default());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                manager.init().unwrap();
                manager.convert(&GBK).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), UTF.to_vec());
    }

    // every thread converted the same SSID, only one entry survives
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.lookup(&UTF).unwrap(), GBK.to_vec());
}

#[test]
fn distinct_ssids_from_many_threads() {
    let manager = Arc::new(SsidManager::default());
    manager.init().unwrap();

    // GBK lead bytes 0xB0..0xB7 with a fixed trail, one per thread
    let handles: Vec<_> = (0xB0u8..0xB8)
        .map(|lead| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                let ssid = vec![b'A', b'P', lead, 0xA1];
                assert!(is_gbk_ssid(&ssid));
                let converted = manager.convert(&ssid).unwrap();
                (ssid, converted)
            })
        })
        .collect();

    let pairs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(manager.len(), pairs.len());

    for (ssid, converted) in pairs {
        assert_eq!(manager.lookup(&ssid).unwrap(), converted);
        assert_eq!(manager.lookup(&converted).unwrap(), ssid);
    }
}

#[test]
fn session_lifecycle() {
    let manager = SsidManager::default();

    assert!(matches!(
        manager.lookup(&GBK),
        Err(SsidError::Cache(CacheError::NotInitialized))
    ));

    manager.init().unwrap();
    manager.record(&GBK, &UTF).unwrap();
    assert_eq!(manager.history().unwrap(), vec![CacheEntry::new(GBK.to_vec(), UTF.to_vec())]);

    manager.deinit().unwrap();
    assert!(matches!(
        manager.lookup(&UTF),
        Err(SsidError::Cache(CacheError::NotInitialized))
    ));

    manager.init().unwrap();
    assert!(matches!(
        manager.lookup(&UTF),
        Err(SsidError::Cache(CacheError::NotFound))
    ));
}

#[test]
fn fallback_to_raw_bytes() {
    let manager = SsidManager::default();

    // no session: conversion cannot be recorded, raw bytes are shown
    assert_eq!(manager.display_ssid(&GBK), GBK.to_vec());
    assert_eq!(manager.driver_ssid(&UTF), UTF.to_vec());

    manager.init().unwrap();
    assert_eq!(manager.display_ssid(&GBK), UTF.to_vec());
    assert_eq!(manager.driver_ssid(&UTF), GBK.to_vec());
}
