use env_logger::Env;
use log::debug;

use pokepicker::{PickerConfig, PokePicker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = PickerConfig::load()?;
    debug!("{:#?}", config);

    println!("P O K É M O N - P I C K E R");
    println!();
    println!();

    let picker = PokePicker::builder().config(config).build()?;

    if picker.needs_generation() {
        println!("No Database found. Generating...");
        println!();
        let generated = picker.generate()?;
        debug!("Generated {} records", generated.records);
    }

    match picker.pick(&mut rand::rng())? {
        Some(record) => println!("{record}"),
        None => println!("Error! File does not exist!"),
    }

    Ok(())
}
