use std::{env, path::Path};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const GLSL_EXTENSION: &str = "h.glsl";
const HEADER_NAME: &str = "rand";

fn main() -> Result<()> {
    env_logger::init();

    let output_dirname = env::args().nth(1).ok_or("No output directory specified")?;
    let output_dir = Path::new(&output_dirname);
    if !output_dir.is_dir() {
        return Err(format!("{} is not a directory", output_dir.display()).into());
    }

    let mut output_file = output_dir.to_owned();
    output_file.push(HEADER_NAME);
    output_file.set_extension(GLSL_EXTENSION);
    std::fs::write(&output_file, rng::glsl::header())?;
    log::info!("GLSL header written to {}", output_file.display());

    Ok(())
}
