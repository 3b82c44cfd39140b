use base_convert::{alphabet::check_base, encode, logger::setup_logger, parse_decimal};

fn main() -> anyhow::Result<()> {
    setup_logger();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 3 {
        println!("Usage: {} number base", args[0]);
        return Ok(());
    }

    let number = &args[1];
    let base: u32 = args[2].parse()?;
    check_base(base)?;

    let digits = encode(parse_decimal(number)?, base)?;
    println!("{number} in base 10 is {digits} in base {base}");

    Ok(())
}
