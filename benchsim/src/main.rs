fn main() -> anyhow::Result<()> {
    benchsim::run()
}
