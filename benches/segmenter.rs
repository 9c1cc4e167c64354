//! Segmenter performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use std::collections::HashMap;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use emotext::{ContentController, EmoteToken, MarkerScanner, Reply, segment};

fn emote_map(count: usize) -> HashMap<String, EmoteToken> {
    (0..count)
        .map(|i| {
            let key = format!("[emote{i}]");
            let token = EmoteToken::new(key.clone(), format!("http://x/{i}.png"));
            (key, token)
        })
        .collect()
}

fn marker_text(markers: usize) -> String {
    let mut text = String::new();
    for i in 0..markers {
        text.push_str("some words ");
        text.push_str(&format!("[emote{}]", i % 8));
    }
    text
}

fn scanner(c: &mut Criterion) {
    let short = marker_text(2);
    c.bench_function("scanner_short", |b| {
        b.iter(|| MarkerScanner::new(black_box(&short)).count());
    });

    let long = marker_text(200);
    c.bench_function("scanner_long", |b| {
        b.iter(|| MarkerScanner::new(black_box(&long)).count());
    });

    let no_markers = "plain text without any markers at all ".repeat(50);
    c.bench_function("scanner_no_markers", |b| {
        b.iter(|| MarkerScanner::new(black_box(&no_markers)).count());
    });
}

fn segmenter(c: &mut Criterion) {
    let emotes = emote_map(8);
    let short = marker_text(2);
    c.bench_function("segment_short", |b| {
        b.iter(|| segment(black_box(&short), &emotes));
    });

    let long = marker_text(200);
    c.bench_function("segment_long", |b| {
        b.iter(|| segment(black_box(&long), &emotes));
    });

    let none: HashMap<String, EmoteToken> = HashMap::new();
    c.bench_function("segment_fast_path", |b| {
        b.iter(|| segment(black_box(&long), &none));
    });
}

fn controller(c: &mut Criterion) {
    let text = marker_text(8);
    c.bench_function("controller_set_reply", |b| {
        let mut controller = ContentController::new();
        b.iter(|| {
            let reply = Reply::new(text.clone(), emote_map(8).into_values());
            controller.set_reply(black_box(reply));
        });
    });

    c.bench_function("controller_overflow", |b| {
        let mut controller = ContentController::new();
        controller.set_reply(Reply::new(text.clone(), emote_map(8).into_values()));
        b.iter(|| {
            let _ = black_box(controller.request_overflow());
        });
    });
}

criterion_group!(benches, scanner, segmenter, controller);
criterion_main!(benches);
