use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};

// Hash the static assets so templates can cache-bust asset URLs.
fn main() {
    println!("cargo:rerun-if-changed=static/");

    let mut files: Vec<_> = fs::read_dir("static")
        .expect("static directory missing")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    let mut hasher = DefaultHasher::new();
    for path in &files {
        path.file_name().unwrap().to_str().unwrap().hash(&mut hasher);
        fs::read(path).unwrap().hash(&mut hasher);
    }

    let digest = format!("{:x}", hasher.finish());
    println!("cargo:rustc-env=STATIC_HASH={}", &digest[..8]);
}
