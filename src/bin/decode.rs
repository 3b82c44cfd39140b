use base_convert::{decode, logger::setup_logger};

fn main() -> anyhow::Result<()> {
    setup_logger();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 3 {
        println!("Usage: {} digits base", args[0]);
        return Ok(());
    }

    let digits = &args[1];
    let base: u32 = args[2].parse()?;

    let value = decode(digits, base)?;
    println!("{digits} in base {base} is {value} in base 10");

    Ok(())
}
