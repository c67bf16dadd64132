use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use storage_estimator::{Catalog, ImageFormat, ImageId};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

pub fn create_command_script(temp_dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let script = temp_dir.join(name);
    let mut file = File::create(&script).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    script
}

pub fn catalog_with(images: &[(ImageFormat, u32, u32)]) -> Catalog {
    let mut catalog = Catalog::new();
    for &(format, width, height) in images {
        catalog.add_image(format, width, height);
    }
    catalog
}

/// Number of containers holding `id`, counting duplicates
pub fn owner_count(catalog: &Catalog, id: ImageId) -> usize {
    let in_pool = catalog
        .unstacked_images()
        .iter()
        .filter(|image| image.id() == id)
        .count();
    let in_stacks: usize = catalog
        .stacks()
        .iter()
        .map(|stack| stack.images().iter().filter(|image| image.id() == id).count())
        .sum();
    in_pool + in_stacks
}
