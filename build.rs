// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_root = "proto";

    println!("cargo:rerun-if-changed={proto_root}/gnfinder.proto");
    println!("cargo:rerun-if-env-changed=GNFINDER_REGEN_PROTO");

    // The generated client lives in src/proto and is checked in, so regular
    // builds do not need protoc on the PATH.
    if std::env::var_os("GNFINDER_REGEN_PROTO").is_none() {
        return Ok(());
    }

    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .out_dir("src/proto") // generated Rust goes here
        .compile(&[format!("{proto_root}/gnfinder.proto")], &[proto_root])?;

    Ok(())
}
