use base_convert::{convert, logger::setup_logger};

fn main() -> anyhow::Result<()> {
    setup_logger();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 4 {
        println!("Usage: {} digits base1 base2", args[0]);
        println!("Converts digits from base1 to base2");
        return Ok(());
    }

    let digits = &args[1];
    let base1: u32 = args[2].parse()?;
    let base2: u32 = args[3].parse()?;

    let result = convert(digits, base1, base2)?;
    println!("{digits} in base {base1} is {result} in base {base2}");

    Ok(())
}
