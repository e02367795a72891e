fn main() -> anyhow::Result<()> {
    tritgen::cli::run()
}
