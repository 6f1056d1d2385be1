//! Basic usage example for charprobe-api

use charprobe_api::{list_languages, Detector, DetectorConfig, NameStyle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Available languages: {}", list_languages().join(", "));

    // Detect with the default policy
    let detector = Detector::new("zh")?;
    let text = "美国各州选民今天开始正式投票。据信，";
    for style in NameStyle::ALL {
        let name = detector.detect_str(text, style)?;
        println!("{style:>12}: {name}");
    }
    detector.release()?;

    // Detect with a stricter policy
    let config = DetectorConfig::builder()
        .language("ru")
        .strict()
        .build()?;
    let detector = Detector::with_config(config)?;
    match detector.detect(&[0u8; 32], NameStyle::Default) {
        Ok(name) => println!("Binary sample detected as {name}"),
        Err(e) => println!("Binary sample rejected: {e}"),
    }
    detector.release()?;

    Ok(())
}
