use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

pub fn wayfarer() -> Command {
    cargo_bin_cmd!("wayfarer")
}

/// Write a small city grid: a one-way square plus a disconnected vertex
#[allow(dead_code)]
pub fn write_sample_map(path: &Path) {
    let records = "\
V,1,0.0,0.0
V,2,0.0,1.0
V,3,1.0,1.0
V,4,1.0,0.0
V,5,5.0,5.0
E,1,2,\"First Ave\"
E,2,3,\"Second St\"
E,3,4,\"Third Blvd\"
E,1,4,\"Shortcut\"
";
    std::fs::write(path, records).expect("failed to write sample map");
}
