// Copyright 2014-2015 The html5io Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Deserialize;

// A struct matching the entries in entities.json.
#[derive(Deserialize)]
struct CharRef {
    codepoints: Vec<u32>,
    // `characters` is present in the file but we don't need it.
}

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");

    let path = Path::new(&manifest_dir).join("data").join("entities.json");
    println!("cargo:rerun-if-changed={}", path.display());

    let json_file = File::open(&path).expect("can't open JSON file");
    let entities: HashMap<String, CharRef> =
        serde_json::from_reader(BufReader::new(json_file)).expect("can't parse JSON file");

    let named = build_map(&entities);
    let encode = build_encode_map(&entities);

    let path = Path::new(&out_dir).join("named_entities.rs");
    let mut file = BufWriter::new(File::create(&path).expect("can't create named_entities.rs"));

    // phf_codegen borrows keys and values until the map is built.
    let values: Vec<(&str, String)> = named
        .iter()
        .map(|(k, v)| (&k[..], format!("{:?}", v)))
        .collect();
    let mut phf_map = phf_codegen::Map::new();
    for (key, value) in values.iter() {
        phf_map.entry(*key, &value[..]);
    }
    writeln!(
        &mut file,
        "pub static NAMED_ENTITIES: phf::Map<&'static str, (u32, u32)> = {};",
        phf_map.build()
    )
    .expect("can't write named_entities.rs");

    let values: Vec<(u32, String)> = encode
        .iter()
        .map(|(&c, name)| (c, format!("{:?}", name)))
        .collect();
    let mut phf_map = phf_codegen::Map::new();
    for (key, value) in values.iter() {
        phf_map.entry(*key, &value[..]);
    }
    writeln!(
        &mut file,
        "pub static ENCODE_NAMES: phf::Map<u32, &'static str> = {};",
        phf_map.build()
    )
    .expect("can't write named_entities.rs");
}

// Build the map from entity names (and their prefixes) to characters.
fn build_map(entities: &HashMap<String, CharRef>) -> BTreeMap<String, (u32, u32)> {
    let mut map = BTreeMap::new();

    // Add every named entity to the map.
    for (k, v) in entities.iter() {
        let codepoints = &v.codepoints;
        assert!(!codepoints.is_empty() && codepoints.len() <= 2);
        let codepoint_pair = (codepoints[0], codepoints.get(1).cloned().unwrap_or(0));

        // Slice off the initial '&'
        assert!(k.starts_with('&'));
        map.insert(k[1..].to_string(), codepoint_pair);
    }

    // Add every missing prefix of those keys, mapping to NULL characters.
    let keys: Vec<String> = map.keys().cloned().collect();
    for k in keys.into_iter() {
        for n in 1..k.len() {
            map.entry(k[..n].to_string()).or_insert((0, 0));
        }
    }

    map
}

// Build the map from single characters to the entity name used when encoding them.
//
// Only semicolon-terminated names are candidates. The shortest name wins, then one
// starting with a lowercase letter (`amp;` over `AMP;`), then the smallest.
fn build_encode_map(entities: &HashMap<String, CharRef>) -> BTreeMap<u32, String> {
    let mut map: BTreeMap<u32, String> = BTreeMap::new();

    for (k, v) in entities.iter() {
        if v.codepoints.len() != 1 || !k.ends_with(';') {
            continue;
        }
        let name = k[1..].to_string();
        let rank = |n: &str| (n.len(), !n.starts_with(|c: char| c.is_ascii_lowercase()), n.to_string());

        let better = match map.get(&v.codepoints[0]) {
            None => true,
            Some(current) => rank(name.as_str()) < rank(current.as_str()),
        };
        if better {
            map.insert(v.codepoints[0], name);
        }
    }

    map
}
