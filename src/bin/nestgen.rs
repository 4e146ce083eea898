fn main() -> anyhow::Result<()> {
    nestgen::cli::run_cli()
}
