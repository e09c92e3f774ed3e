//! Concurrency tests: arbitrary interleaving of adds, deletes and
//! iteration across threads must never corrupt membership or panic.

use chrono::NaiveDate;
use galleria::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn piece(name: &str, artist: &str) -> Art {
    Art::with_price(name, ArtKind::Painting, artist, date(2024, 1, 1), 100).unwrap()
}

#[test]
fn concurrent_adds_of_distinct_art_all_land() {
    let gallery = Arc::new(Gallery::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let gallery = Arc::clone(&gallery);
            thread::spawn(move || {
                for i in 0..100 {
                    gallery.add_art(piece(&format!("name-{t}-{i}"), &format!("artist{t}")));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(gallery.all_art().len(), 800);
    assert_eq!(gallery.artists().len(), 8);
}

#[test]
fn concurrent_adds_of_same_identity_keep_single_record() {
    let gallery = Arc::new(Gallery::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let gallery = Arc::clone(&gallery);
            thread::spawn(move || {
                let mut added = 0u32;
                for i in 0..100 {
                    // Same identity every time; date and price vary per thread.
                    let art = Art::with_price(
                        "name",
                        ArtKind::Vase,
                        "artist",
                        date(2024, 1, 1 + (i % 28)),
                        t * 100 + i,
                    )
                    .unwrap();
                    if gallery.add_art(art) {
                        added += 1;
                    }
                }
                added
            })
        })
        .collect();

    let total_added: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();

    // Exactly one insert won across all threads and iterations.
    assert_eq!(total_added, 1);
    assert_eq!(gallery.all_art().len(), 1);
}

#[test]
fn iteration_is_safe_under_concurrent_mutation() {
    let gallery = Arc::new(Gallery::new());

    // Stable records that no thread touches.
    let stable: Vec<Art> = (0..50).map(|i| piece(&format!("stable{i}"), "keeper")).collect();
    for art in &stable {
        gallery.add_art(art.clone());
    }

    let writer = {
        let gallery = Arc::clone(&gallery);
        thread::spawn(move || {
            for round in 0..20 {
                for i in 0..50 {
                    gallery.add_art(piece(&format!("churn-{round}-{i}"), "churner"));
                }
                for i in 0..50 {
                    gallery.delete_art(&piece(&format!("churn-{round}-{i}"), "churner"));
                }
            }
        })
    };

    let reader = {
        let gallery = Arc::clone(&gallery);
        let stable = stable.clone();
        thread::spawn(move || {
            for _ in 0..20 {
                let yielded: Vec<Art> = gallery.all_art().iter().collect();

                // No duplicates, and every stable record shows up.
                let distinct: HashSet<&Art> = yielded.iter().collect();
                assert_eq!(distinct.len(), yielded.len());
                for art in &stable {
                    assert!(yielded.contains(art));
                }
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();

    // Churn is gone; the stable records remain.
    assert_eq!(gallery.all_art().len(), 50);
}

#[test]
fn queries_are_safe_under_concurrent_mutation() {
    let gallery = Arc::new(Gallery::new());
    for i in 0..100 {
        gallery.add_art(piece(&format!("name{i}"), &format!("artist{}", i % 10)));
    }

    let writer = {
        let gallery = Arc::clone(&gallery);
        thread::spawn(move || {
            for i in 0..500 {
                gallery.add_art(piece(&format!("extra{i}"), "extra"));
                gallery.delete_art(&piece(&format!("extra{i}"), "extra"));
            }
        })
    };

    let reader = {
        let gallery = Arc::clone(&gallery);
        thread::spawn(move || {
            for _ in 0..200 {
                let artists = gallery.artists();
                assert!(artists.len() >= 10);

                assert_eq!(gallery.art_by_artist("artist0").len(), 10);
                assert!(gallery.art_by_price(Some(100), Some(100)).len() >= 100);
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
}

#[test]
fn concurrent_deletes_remove_each_record_once() {
    let gallery = Arc::new(Gallery::new());
    for i in 0..400 {
        gallery.add_art(piece(&format!("name{i}"), "artist"));
    }

    // Two threads race to delete the same 400 records.
    let handles: Vec<_> = (0..2)
        .map(|_| {
            let gallery = Arc::clone(&gallery);
            thread::spawn(move || {
                let mut removed = 0u32;
                for i in 0..400 {
                    if gallery.delete_art(&piece(&format!("name{i}"), "artist")) {
                        removed += 1;
                    }
                }
                removed
            })
        })
        .collect();

    let total_removed: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(total_removed, 400);
    assert!(gallery.all_art().is_empty());
}
