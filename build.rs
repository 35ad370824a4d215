use std::path::Path;

include!("src/assets.rs");

fn main() {
    // A missing image should fail the build instead of rendering a broken card
    for image in PROJECT_IMAGES {
        let path = Path::new(ASSETS_DIR).join(image);
        println!("cargo:rerun-if-changed={}", path.display());
        if !path.is_file() {
            panic!("missing project image asset: {}", path.display());
        }
    }

    // Rerun if build.rs or the asset list changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/assets.rs");
}
