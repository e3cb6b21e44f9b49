use asmstat::cli;

fn main() -> anyhow::Result<()> {
    cli::run::entry()
}
