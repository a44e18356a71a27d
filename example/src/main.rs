fn main() -> Result<(), Box<dyn std::error::Error>> {
    example::init_tracing();
    example::run()?;
    Ok(())
}
