// Shared with build.rs through `include!`, so this file holds plain items only.

/// Directory (relative to the crate root) the project images are served from.
pub const ASSETS_DIR: &str = "public/assets";

pub const PROJECT_PIC_1: &str = "project-pic-1.svg";
pub const PROJECT_PIC_2: &str = "project-pic-2.svg";
pub const PROJECT_PIC_3: &str = "project-pic-3.svg";
pub const PROJECT_PIC_4: &str = "project-pic-4.svg";

/// Every image the catalog references. The build fails if any is missing.
pub const PROJECT_IMAGES: [&str; 4] = [PROJECT_PIC_1, PROJECT_PIC_2, PROJECT_PIC_3, PROJECT_PIC_4];
