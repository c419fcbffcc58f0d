// build.rs
// Build script for shader and texture resource discovery

use std::env;
use std::path::PathBuf;

fn main() {
    let manifest_dir = PathBuf::from(
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo"),
    );
    let resource_dir = manifest_dir.join("../../resources");

    // Tell cargo to rerun this build script if any resource files change
    println!("cargo:rerun-if-changed={}", resource_dir.join("shaders").display());
    println!("cargo:rerun-if-changed={}", resource_dir.join("textures").display());

    // GLSL is compiled by the driver at runtime, so only check the sources are present
    for shader in ["phong.vs", "phong.fs", "lamp.vs", "lamp.fs"] {
        let path = resource_dir.join("shaders").join(shader);
        if !path.exists() {
            println!("cargo:warning=Shader source missing: {}", path.display());
        }
    }

    let resource_dir = resource_dir.canonicalize().unwrap_or(resource_dir);
    println!("cargo:rustc-env=TOWN_RESOURCE_DIR={}", resource_dir.display());
}
