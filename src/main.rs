use cvgen::types::{Error, StyleSheet};
use cvgen::{assemble, content};

const OUTPUT_PATH: &str = "assets/Wendeel-Marinho-CTO-Resume.pdf";

fn main() -> Result<(), Error> {
    env_logger::init();

    let resume = content::resume();
    let styles = StyleSheet::default();
    let doc = assemble::assemble(&resume, &styles);

    doc.save(OUTPUT_PATH)?;

    println!("✅ PDF generated successfully: {OUTPUT_PATH}");

    Ok(())
}
